use crate::application::session::session;
use crate::domain::logging::{get_logger, LogComponent};
use leptos::*;
use leptos_router::{use_navigate, A};

/// Sticky top navigation, auth-aware: watchlist and logout controls appear
/// for a signed-in user, a sign-in link otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth_controls = match session() {
        Ok(ctx) => {
            let user = ctx.user;
            let checking = ctx.checking;
            let navigate = use_navigate();

            let handle_logout = move |_| {
                let navigate = navigate.clone();
                if let Ok(ctx) = session() {
                    spawn_local(async move {
                        ctx.logout().await;
                        navigate("/", Default::default());
                    });
                }
            };

            (move || {
                if checking.get() {
                    ().into_view()
                } else if let Some(user) = user.get() {
                    view! {
                        <A href="/watchlist" class="btn btn-ghost">
                            "Watchlist"
                        </A>
                        <span class="navbar-user mono muted">{user.username}</span>
                        <button class="btn btn-outline" on:click=handle_logout.clone()>
                            "Logout"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <A href="/login" class="btn btn-accent">
                            "Sign In"
                        </A>
                    }
                    .into_view()
                }
            })
            .into_view()
        }
        Err(err) => {
            get_logger().error(
                LogComponent::Presentation("Navbar"),
                &format!("Session unavailable: {err}"),
            );
            ().into_view()
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" class="navbar-brand mono">
                    <span class="brand-mark"></span>
                    "StockAnalysis"
                </A>

                <div class="navbar-links">
                    <A href="/" class="btn btn-ghost">
                        "Dashboard"
                    </A>
                    <A href="/recommendations" class="btn btn-ghost">
                        "Recommendations"
                    </A>
                    <A href="/search" class="btn btn-ghost">
                        "Search"
                    </A>
                    {auth_controls}
                </div>
            </div>
        </nav>
    }
}
