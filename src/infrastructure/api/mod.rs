pub mod dto;

use crate::domain::errors::{ApiResult, AppError};
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::market_data::{PricePoint, PriceSeries};
use crate::domain::stocks::{Category, Recommendation, Stock, StockDetail, Ticker, User, WatchlistItem};
use dto::{ApiErrorBody, AuthResponse, LoginRequest, RegisterRequest, WatchlistAddRequest};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

/// API base URL, fixed at build time; `STOCK_API_URL` overrides the default
pub fn api_base_url() -> &'static str {
    option_env!("STOCK_API_URL").unwrap_or("http://localhost:5000/api")
}

/// Thin REST client over the external scoring API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self { base_url: api_base_url().to_string() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /recommendations?category=..&limit=N`
    pub async fn recommendations(
        &self,
        category: Category,
        limit: u32,
    ) -> ApiResult<Vec<Recommendation>> {
        let url = format!(
            "{}?category={}&limit={}",
            self.url("/recommendations"),
            category.query_value(),
            limit
        );
        self.get_json(&url, false).await
    }

    /// `GET /search?q=..`; callers guard the two-character minimum
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Stock>> {
        let encoded = js_sys::encode_uri_component(query);
        let url = format!("{}?q={}", self.url("/search"), String::from(encoded));
        self.get_json(&url, false).await
    }

    /// `GET /stocks/{ticker}`
    pub async fn stock_detail(&self, ticker: &Ticker) -> ApiResult<StockDetail> {
        let url = self.url(&format!("/stocks/{}", ticker.value()));
        self.get_json(&url, false).await
    }

    /// `GET /stocks/{ticker}/prices`, restored to chronological order
    pub async fn price_history(&self, ticker: &Ticker) -> ApiResult<PriceSeries> {
        let url = self.url(&format!("/stocks/{}/prices", ticker.value()));
        let points: Vec<PricePoint> = self.get_json(&url, false).await?;
        Ok(PriceSeries::from_points(points))
    }

    /// `GET /watchlist` (credentialed); 401 when no session is active
    pub async fn watchlist(&self) -> ApiResult<Vec<WatchlistItem>> {
        self.get_json(&self.url("/watchlist"), true).await
    }

    /// `POST /watchlist {ticker}` (credentialed); a 401 is surfaced as an
    /// actionable sign-in message rather than a generic failure
    pub async fn add_to_watchlist(&self, ticker: &Ticker) -> ApiResult<()> {
        let request = Request::post(&self.url("/watchlist"))
            .credentials(RequestCredentials::Include)
            .json(&WatchlistAddRequest { ticker: ticker.value() })
            .map_err(|e| AppError::Network(format!("Failed to encode request: {e:?}")))?;
        let response = send(request.send()).await?;

        if response.status() == 401 {
            return Err(AppError::Unauthorized(
                "Please sign in to add to watchlist".to_string(),
            ));
        }
        if !response.ok() {
            return Err(http_error(&response, "Failed to add to watchlist").await);
        }
        Ok(())
    }

    /// `DELETE /watchlist/{ticker}` (credentialed)
    pub async fn remove_from_watchlist(&self, ticker: &Ticker) -> ApiResult<()> {
        let response = send(
            Request::delete(&self.url(&format!("/watchlist/{}", ticker.value())))
                .credentials(RequestCredentials::Include)
                .send(),
        )
        .await?;

        if !response.ok() {
            return Err(http_error(&response, "Failed to remove from watchlist").await);
        }
        Ok(())
    }

    /// `GET /auth/me` (credentialed)
    pub async fn current_user(&self) -> ApiResult<User> {
        let envelope: AuthResponse = self.get_json(&self.url("/auth/me"), true).await?;
        Ok(envelope.user)
    }

    /// `POST /auth/login` (credentialed)
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        self.auth_post("/auth/login", &LoginRequest { email, password }, "Invalid credentials")
            .await
    }

    /// `POST /auth/register` (credentialed)
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<User> {
        self.auth_post(
            "/auth/register",
            &RegisterRequest { username, email, password },
            "Registration failed",
        )
        .await
    }

    /// `POST /auth/logout` (credentialed, response ignored by callers)
    pub async fn logout(&self) -> ApiResult<()> {
        let response = send(
            Request::post(&self.url("/auth/logout"))
                .credentials(RequestCredentials::Include)
                .send(),
        )
        .await?;
        if !response.ok() {
            return Err(http_error(&response, "Logout failed").await);
        }
        Ok(())
    }

    async fn auth_post<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        default_message: &str,
    ) -> ApiResult<User> {
        let request = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to encode request: {e:?}")))?;
        let response = send(request.send()).await?;

        if !response.ok() {
            return Err(http_error(&response, default_message).await);
        }
        let envelope: AuthResponse = parse_json(response).await?;
        Ok(envelope.user)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, credentialed: bool) -> ApiResult<T> {
        get_logger().info(LogComponent::Infrastructure("Api"), &format!("GET {url}"));

        let mut builder: RequestBuilder = Request::get(url);
        if credentialed {
            builder = builder.credentials(RequestCredentials::Include);
        }
        let response = send(builder.send()).await?;

        if !response.ok() {
            return Err(
                http_error(&response, &format!("Failed to fetch: {}", response.status_text()))
                    .await,
            );
        }
        parse_json(response).await
    }
}

async fn send(
    pending: impl std::future::Future<Output = Result<Response, gloo_net::Error>>,
) -> ApiResult<Response> {
    pending.await.map_err(|e| AppError::Network(format!("Request failed: {e:?}")))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| AppError::Network(format!("Failed to parse JSON: {e:?}")))
}

/// Build an `Http` error, preferring the server-supplied `{message}` body
async fn http_error(response: &Response, default_message: &str) -> AppError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_message.to_string());
    get_logger().warn(
        LogComponent::Infrastructure("Api"),
        &format!("HTTP {status}: {message}"),
    );
    AppError::Http { status, message }
}
