use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    Login,
    Register,
}

/// Field values collected from a validated form submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubmission {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Per-field validation outcome; messages render uppercase monospace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthFormErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl AuthFormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Mirror of the submit-time email shape check: non-empty local part and a
/// dotted domain, no whitespace or extra separators
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.chars().any(char::is_whitespace)
}

/// Client-side checks; failures here never reach the network
pub fn validate_credentials(
    kind: AuthFormKind,
    username: &str,
    email: &str,
    password: &str,
) -> AuthFormErrors {
    let mut errors = AuthFormErrors::default();

    if kind == AuthFormKind::Register && username.trim().is_empty() {
        errors.username = Some("USERNAME IS REQUIRED");
    }

    if email.trim().is_empty() {
        errors.email = Some("EMAIL IS REQUIRED");
    } else if !is_valid_email(email) {
        errors.email = Some("INVALID EMAIL FORMAT");
    }

    if password.is_empty() {
        errors.password = Some("PASSWORD IS REQUIRED");
    } else if password.len() < 6 {
        errors.password = Some("PASSWORD MUST BE AT LEAST 6 CHARACTERS");
    }

    errors
}

/// Shared login/register card: validation, show-password toggle, server
/// error panel, busy state
#[component]
pub fn AuthForm(
    kind: AuthFormKind,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_error: Signal<Option<String>>,
    on_submit: Callback<AuthSubmission>,
) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (errors, set_errors) = create_signal(AuthFormErrors::default());

    let is_login = kind == AuthFormKind::Login;

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let checked =
            validate_credentials(kind, &username.get(), &email.get(), &password.get());
        set_errors.set(checked);
        if !checked.is_empty() {
            return;
        }

        on_submit.call(AuthSubmission {
            username: username.get(),
            email: email.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2>{if is_login { "Sign In" } else { "Create Account" }}</h2>
                <p class="mono muted">
                    {if is_login {
                        "Enter your credentials to access your watchlist"
                    } else {
                        "Sign up to start tracking your favorite stocks"
                    }}
                </p>
            </div>

            <form on:submit=handle_submit>
                {(!is_login)
                    .then(|| {
                        view! {
                            <div class="field">
                                <label for="username">"Username"</label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="Enter your username"
                                    prop:value=username
                                    prop:disabled=busy
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                />
                                {move || {
                                    errors
                                        .get()
                                        .username
                                        .map(|msg| view! { <p class="field-error">{msg}</p> })
                                }}
                            </div>
                        }
                    })}

                <div class="field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=email
                        prop:disabled=busy
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || {
                        errors.get().email.map(|msg| view! { <p class="field-error">{msg}</p> })
                    }}
                </div>

                <div class="field">
                    <label for="password">"Password"</label>
                    <div class="password-row">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=password
                            prop:disabled=busy
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        errors.get().password.map(|msg| view! { <p class="field-error">{msg}</p> })
                    }}
                </div>

                {move || {
                    server_error
                        .get()
                        .map(|msg| view! { <div class="form-error"><p>{msg}</p></div> })
                }}

                <button type="submit" class="btn btn-accent btn-block" prop:disabled=busy>
                    {move || {
                        if busy.get() {
                            "Processing..."
                        } else if is_login {
                            "Sign In"
                        } else {
                            "Create Account"
                        }
                    }}
                </button>
            </form>

            <div class="auth-card-footer">
                <p class="mono muted">
                    {if is_login { "Don't have an account? " } else { "Already have an account? " }}
                    <a href={if is_login { "/register" } else { "/login" }} class="accent">
                        {if is_login { "Sign Up" } else { "Sign In" }}
                    </a>
                </p>
            </div>
        </div>
    }
}
