use crate::application::{FetchState, RequestGuard};
use crate::domain::stocks::{Ticker, WatchlistItem};
use crate::infrastructure::api::ApiClient;
use crate::presentation::components::{ErrorPanel, SkeletonRows};
use leptos::*;
use leptos_router::{use_navigate, A};

/// The signed-in user's saved tickers. The route guard keeps cookie-less
/// visitors out; a 401 from the API (stale cookie) still falls back to the
/// login page.
#[component]
pub fn WatchlistPage() -> impl IntoView {
    let navigate = use_navigate();
    let (items, set_items) = create_signal(FetchState::<Vec<WatchlistItem>>::Idle);
    let (banner_error, set_banner_error) = create_signal(Option::<String>::None);
    let (removing, set_removing) = create_signal(Option::<i64>::None);
    let (retries, set_retries) = create_signal(0u32);
    let guard = RequestGuard::new();

    create_effect({
        let navigate = navigate.clone();
        move |_| {
            retries.track();
            let token = guard.begin();
            let navigate = navigate.clone();
            set_items.set(FetchState::Loading);
            spawn_local(async move {
                let result = ApiClient::new().watchlist().await;
                if !token.is_current() {
                    return;
                }
                match result {
                    Ok(list) => set_items.set(FetchState::Ready(list)),
                    Err(err) if err.status() == Some(401) => {
                        navigate("/login", Default::default());
                    }
                    Err(err) => set_items.set(FetchState::Failed(err.user_message())),
                }
            });
        }
    });

    let handle_remove = move |ticker: Ticker, id: i64| {
        set_removing.set(Some(id));
        set_banner_error.set(None);
        spawn_local(async move {
            match ApiClient::new().remove_from_watchlist(&ticker).await {
                Ok(()) => {
                    set_items.update(|state| {
                        if let FetchState::Ready(list) = state {
                            list.retain(|item| item.id != id);
                        }
                    });
                }
                Err(err) => set_banner_error.set(Some(err.user_message())),
            }
            set_removing.set(None);
        });
    };

    view! {
        <div class="page-hero">
            <h1>"Your Watchlist"</h1>
            <p class="mono muted">"Track and manage your favorite stocks"</p>
        </div>

        {move || {
            banner_error
                .get()
                .map(|message| view! { <div class="form-error"><p>{message}</p></div> })
        }}

        {move || match items.get() {
            FetchState::Idle | FetchState::Loading => view! { <SkeletonRows count=4/> }.into_view(),
            FetchState::Failed(message) => {
                view! {
                    <ErrorPanel
                        message=message
                        on_retry=Callback::new(move |()| set_retries.update(|r| *r += 1))
                    />
                }
                    .into_view()
            }
            FetchState::Ready(list) if list.is_empty() => {
                view! {
                    <div class="empty-panel">
                        <div class="empty-block"></div>
                        <h3>"No Stocks Yet"</h3>
                        <p class="mono muted">
                            "Your watchlist is empty. Start adding stocks to track their \
                             performance."
                        </p>
                        <A href="/recommendations" class="btn btn-accent">
                            "Browse Recommendations"
                        </A>
                    </div>
                }
                    .into_view()
            }
            FetchState::Ready(list) => {
                view! {
                    <div class="result-list">
                        {list
                            .into_iter()
                            .map(|item| view_item(item, removing, handle_remove))
                            .collect_view()}
                    </div>
                }
                    .into_view()
            }
        }}
    }
}

fn view_item(
    item: WatchlistItem,
    removing: ReadSignal<Option<i64>>,
    on_remove: impl Fn(Ticker, i64) + Copy + 'static,
) -> impl IntoView {
    let href = format!("/stock/{}", item.ticker);
    let id = item.id;
    let ticker = item.ticker.clone();
    let added = item
        .added_date()
        .map(|date| format!("Added {}", date.format("%m/%d/%Y")))
        .unwrap_or_default();

    view! {
        <div class="result-card">
            <div class="result-identity">
                <div class="result-title">
                    <A href=href.clone() class="result-ticker mono">
                        {item.ticker.to_string()}
                    </A>
                    <span class="market-tag mono">{item.stock.market.clone()}</span>
                </div>
                <h3>{item.stock.name.clone()}</h3>
                <div class="mono muted">
                    <span>
                        {item.stock.sector.clone().unwrap_or_else(|| "Unknown sector".to_string())}
                    </span>
                    <span class="dot-sep">"\u{2022}"</span>
                    <span>{added}</span>
                </div>
            </div>

            <div class="result-actions">
                <A href=href class="btn btn-outline">
                    "View"
                </A>
                <button
                    class="btn btn-outline btn-danger"
                    prop:disabled=move || removing.get() == Some(id)
                    on:click=move |_| on_remove(ticker.clone(), id)
                >
                    {move || if removing.get() == Some(id) { "..." } else { "Remove" }}
                </button>
            </div>
        </div>
    }
}
