use crate::application::session::session;
use crate::presentation::components::{AuthForm, AuthFormKind, AuthSubmission};
use leptos::*;
use leptos_router::use_navigate;

/// Account creation page; mirrors the login flow with the extra username
/// field validated client-side.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);

    create_effect({
        let navigate = navigate.clone();
        move |_| {
            if let Ok(ctx) = session() {
                if ctx.user.get().is_some() {
                    navigate("/watchlist", Default::default());
                }
            }
        }
    });

    let on_submit = Callback::new(move |submission: AuthSubmission| {
        set_busy.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match session() {
                Ok(ctx) => {
                    match ctx
                        .register(&submission.username, &submission.email, &submission.password)
                        .await
                    {
                        Ok(()) => navigate("/watchlist", Default::default()),
                        Err(message) => set_error.set(Some(message)),
                    }
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_busy.set(false);
        });
    });

    view! {
        <div class="auth-page">
            <AuthForm kind=AuthFormKind::Register busy=busy server_error=error on_submit=on_submit/>
        </div>
    }
}
