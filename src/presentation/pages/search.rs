use crate::application::{FetchState, RequestGuard};
use crate::domain::stocks::Stock;
use crate::infrastructure::api::ApiClient;
use crate::presentation::components::{EmptyPanel, ErrorPanel, SkeletonRows};
use leptos::*;
use leptos_router::{use_navigate, use_query_map, A};

/// Minimum query length that may reach the network; shorter queries clear
/// any existing results instead.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= 2
}

/// Ticker/company search, driven by the `q` URL parameter
#[component]
pub fn SearchPage() -> impl IntoView {
    let navigate = use_navigate();
    let query_map = use_query_map();
    let url_query =
        create_memo(move |_| query_map.with(|map| map.get("q").cloned().unwrap_or_default()));

    let (input, set_input) = create_signal(String::new());
    let (results, set_results) = create_signal(FetchState::<Vec<Stock>>::Idle);
    let (has_searched, set_has_searched) = create_signal(false);
    let guard = RequestGuard::new();

    // The input tracks the URL so shared/bookmarked searches populate it
    create_effect(move |_| {
        set_input.set(url_query.get());
    });

    create_effect(move |_| {
        let query = url_query.get();
        let token = guard.begin();

        if !is_searchable(&query) {
            set_results.set(FetchState::Idle);
            return;
        }

        set_has_searched.set(true);
        set_results.set(FetchState::Loading);
        spawn_local(async move {
            let result = ApiClient::new().search(&query).await;
            if !token.is_current() {
                return;
            }
            match result {
                Ok(found) => set_results.set(FetchState::Ready(found)),
                Err(err) => set_results.set(FetchState::Failed(err.user_message())),
            }
        });
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let query = input.get();
        if is_searchable(&query) {
            let encoded = String::from(js_sys::encode_uri_component(&query));
            navigate(&format!("/search?q={encoded}"), Default::default());
        }
    };

    view! {
        <div class="page-hero">
            <h1>"Stock " <span class="accent">"Search"</span></h1>
            <p class="mono muted">"Find stocks by ticker symbol or company name"</p>
        </div>

        <form class="search-form" on:submit=handle_submit>
            <input
                type="text"
                class="search-input mono"
                placeholder="Enter ticker or company name..."
                prop:value=input
                on:input=move |ev| set_input.set(event_target_value(&ev).to_uppercase())
            />
            <button
                type="submit"
                class="btn btn-accent"
                prop:disabled=move || {
                    results.get().is_loading() || !is_searchable(&input.get())
                }
            >
                "Search"
            </button>
        </form>

        {move || match results.get() {
            FetchState::Loading => view! { <SkeletonRows count=4/> }.into_view(),
            FetchState::Failed(message) => view! { <ErrorPanel message=message/> }.into_view(),
            FetchState::Ready(found) if found.is_empty() => {
                if has_searched.get() {
                    view! {
                        <EmptyPanel
                            title="No Results Found"
                            message="Try searching with a different ticker or company name"
                        />
                    }
                        .into_view()
                } else {
                    view_intro().into_view()
                }
            }
            FetchState::Ready(found) => {
                view! {
                    <div class="result-list">
                        <div class="mono muted result-count">
                            {format!(
                                "{} result{} found",
                                found.len(),
                                if found.len() == 1 { "" } else { "s" },
                            )}
                        </div>
                        {found.into_iter().map(view_result).collect_view()}
                    </div>
                }
                    .into_view()
            }
            FetchState::Idle => view_intro().into_view(),
        }}
    }
}

fn view_intro() -> impl IntoView {
    view! {
        <EmptyPanel
            title="Search for Stocks"
            message="Enter a ticker symbol (e.g., AAPL, TSLA) or company name to search"
        />
    }
}

fn view_result(stock: Stock) -> impl IntoView {
    let href = format!("/stock/{}", stock.ticker);
    view! {
        <div class="result-card">
            <div class="result-identity">
                <div class="result-title">
                    <A href=href.clone() class="result-ticker mono">
                        {stock.ticker.to_string()}
                    </A>
                    <span class="market-tag mono">{stock.market}</span>
                </div>
                <h3>{stock.name}</h3>
                <div class="mono muted">
                    {stock.sector.unwrap_or_else(|| "Unknown sector".to_string())}
                </div>
            </div>
            <A href=href class="btn btn-outline">
                "View"
            </A>
        </div>
    }
}
