use crate::domain::errors::AppError;
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::stocks::User;
use crate::infrastructure::api::ApiClient;
use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet};
use once_cell::sync::OnceCell;

/// Session-wide auth state. The `user` field is mutated only by the four
/// operations below; every page reads it, none writes it directly.
#[derive(Debug)]
pub struct SessionContext {
    pub user: RwSignal<Option<User>>,
    /// True until the initial `check_auth` resolves
    pub checking: RwSignal<bool>,
}

static SESSION: OnceCell<SessionContext> = OnceCell::new();

/// Create the session context. Called once at app start, before any page
/// renders; torn down never within a page load.
pub fn init_session() -> &'static SessionContext {
    SESSION.get_or_init(|| SessionContext {
        user: create_rw_signal(None),
        checking: create_rw_signal(true),
    })
}

/// Access the session context, failing with a configuration error when the
/// store has not been initialized yet.
pub fn session() -> Result<&'static SessionContext, AppError> {
    SESSION
        .get()
        .ok_or_else(|| AppError::Config("session context accessed before init_session".to_string()))
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    /// Probe the session-check endpoint once per page load; any failure
    /// (network or non-2xx) clears the local user.
    pub async fn check_auth(&self) {
        match ApiClient::new().current_user().await {
            Ok(user) => {
                get_logger().info(
                    LogComponent::Application("Session"),
                    &format!("Session restored for {}", user.username),
                );
                self.user.set(Some(user));
            }
            Err(err) => {
                get_logger().info(
                    LogComponent::Application("Session"),
                    &format!("No active session: {err}"),
                );
                self.user.set(None);
            }
        }
        self.checking.set(false);
    }

    /// Post credentials; the Err carries a display-ready message and is the
    /// only failure channel - this never panics or rethrows.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        match ApiClient::new().login(email, password).await {
            Ok(user) => {
                self.user.set(Some(user));
                Ok(())
            }
            Err(err) => Err(err.user_message()),
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), String> {
        match ApiClient::new().register(username, email, password).await {
            Ok(user) => {
                self.user.set(Some(user));
                Ok(())
            }
            Err(err) => Err(err.user_message()),
        }
    }

    /// Best-effort server logout; local state clears unconditionally.
    pub async fn logout(&self) {
        if let Err(err) = ApiClient::new().logout().await {
            get_logger().warn(
                LogComponent::Application("Session"),
                &format!("Logout request failed: {err}"),
            );
        }
        self.user.set(None);
    }
}
