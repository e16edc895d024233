use crate::application::RequestGuard;
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::stocks::Ticker;
use crate::infrastructure::api::ApiClient;
use leptos::*;

/// Per-ticker watchlist toggle: membership is checked on mount, add/remove
/// keep the prior display until the call resolves, and a 401 on add surfaces
/// the sign-in message instead of a generic failure.
#[component]
pub fn WatchlistButton(#[prop(into)] ticker: Signal<Ticker>) -> impl IntoView {
    let (checking, set_checking) = create_signal(true);
    let (in_watchlist, set_in_watchlist) = create_signal(false);
    let (updating, set_updating) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);
    let guard = RequestGuard::new();

    // Membership probe, re-run when the ticker changes
    create_effect(move |_| {
        let ticker = ticker.get();
        if ticker.is_empty() {
            return;
        }

        let token = guard.begin();
        set_checking.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = ApiClient::new().watchlist().await;
            if !token.is_current() {
                return;
            }
            match result {
                Ok(items) => {
                    set_in_watchlist.set(items.iter().any(|item| item.ticker == ticker));
                }
                // An unauthenticated or failed probe just leaves the button
                // in its add state; the toggle itself reports real errors
                Err(err) => {
                    get_logger().debug(
                        LogComponent::Presentation("WatchlistButton"),
                        &format!("Membership check failed: {err}"),
                    );
                }
            }
            set_checking.set(false);
        });
    });

    let handle_toggle = move |_| {
        let ticker = ticker.get();
        if ticker.is_empty() || updating.get() {
            return;
        }

        set_updating.set(true);
        set_error.set(None);
        let currently_member = in_watchlist.get();
        spawn_local(async move {
            let client = ApiClient::new();
            let result = if currently_member {
                client.remove_from_watchlist(&ticker).await
            } else {
                client.add_to_watchlist(&ticker).await
            };

            match result {
                Ok(()) => set_in_watchlist.set(!currently_member),
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_updating.set(false);
        });
    };

    view! {
        <div class="watchlist-toggle">
            {move || {
                if checking.get() {
                    view! {
                        <button class="btn btn-outline btn-block" disabled>
                            "Checking..."
                        </button>
                    }
                        .into_view()
                } else {
                    view! {
                        <button
                            class="btn btn-block"
                            class=("btn-accent", in_watchlist)
                            class=("btn-outline", move || !in_watchlist.get())
                            prop:disabled=updating
                            on:click=handle_toggle
                        >
                            {move || {
                                if updating.get() {
                                    "Working..."
                                } else if in_watchlist.get() {
                                    "In Watchlist"
                                } else {
                                    "Add to Watchlist"
                                }
                            }}
                        </button>
                    }
                        .into_view()
                }
            }}

            {move || {
                error.get().map(|message| view! { <div class="form-error"><p>{message}</p></div> })
            }}
        </div>
    }
}
