//! Login page with email + password sign-in and account registration.
//!
//! The page never navigates itself: once the session holds a token,
//! `RouteGuard` sends the user to the `redirect` target it attached, or home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Registration;
use crate::state::session::SessionStore;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

/// Trim and require both sign-in fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate the registration form; a blank full name is omitted.
fn validate_registration_input(
    email: &str,
    username: &str,
    password: &str,
    full_name: &str,
) -> Result<Registration, &'static str> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err("Email, username and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    let full_name = full_name.trim();
    Ok(Registration {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let mode = RwSignal::new(Mode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let session_submit = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match mode.get() {
            Mode::SignIn => {
                let checked = validate_login_input(&email.get(), &password.get());
                let (email_value, password_value) = match checked {
                    Ok(values) => values,
                    Err(msg) => {
                        info.set(msg.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set("Signing in...".to_owned());

                #[cfg(feature = "csr")]
                {
                    let session = session_submit.clone();
                    leptos::task::spawn_local(async move {
                        if session.login(&email_value, &password_value).await {
                            password.set(String::new());
                            info.set(String::new());
                        } else {
                            info.set("Sign-in failed. Check your email and password.".to_owned());
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&session_submit, email_value, password_value);
                    busy.set(false);
                }
            }
            Mode::Register => {
                let registration = match validate_registration_input(
                    &email.get(),
                    &username.get(),
                    &password.get(),
                    &full_name.get(),
                ) {
                    Ok(registration) => registration,
                    Err(msg) => {
                        info.set(msg.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set("Creating account...".to_owned());

                #[cfg(feature = "csr")]
                {
                    let session = session_submit.clone();
                    leptos::task::spawn_local(async move {
                        if session.register(&registration).await {
                            mode.set(Mode::SignIn);
                            password.set(String::new());
                            info.set("Account created. Sign in to continue.".to_owned());
                        } else {
                            info.set("Registration failed.".to_owned());
                        }
                        busy.set(false);
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&session_submit, registration);
                    busy.set(false);
                }
            }
        }
    };

    let toggle_mode = move |_| {
        mode.update(|m| *m = if *m == Mode::SignIn { Mode::Register } else { Mode::SignIn });
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || if mode.get() == Mode::SignIn { "Sign in" } else { "Create account" }}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == Mode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name (optional)"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if mode.get() == Mode::SignIn { "Sign in" } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <button class="login-link" type="button" on:click=toggle_mode>
                    {move || {
                        if mode.get() == Mode::SignIn {
                            "No account? Register"
                        } else {
                            "Have an account? Sign in"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
