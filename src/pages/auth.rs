//! Authentication page with a login/register toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The unauthenticated landing route. Validates credential shape locally,
//! then drives the signup/login calls and navigates to the dashboard once
//! the service accepts the credentials.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::ErrorAlert;
use crate::components::icons::IconDatabase;
use crate::components::layout::Layout;
use crate::net::types::Credentials;
use crate::state::auth::AuthFormState;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthMode;
use crate::util::validate::{validate_email, validate_password};

/// Per-field validation messages for one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    fn is_clean(self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Trim the email and run shape validation over both fields.
///
/// Returns the credentials to submit, or every field message that must be
/// shown instead. Nothing may hit the network on the `Err` side.
fn validate_form(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = email.trim();
    let errors = FieldErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
    };
    if errors.is_clean() {
        Ok(Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

/// Run the calls one submit owes: signup first in register mode, then the
/// login that starts the session either way.
#[cfg(feature = "hydrate")]
async fn submit_credentials(mode: AuthMode, credentials: &Credentials) -> Result<(), String> {
    if mode.requires_signup() {
        crate::net::api::signup(credentials).await?;
    }
    crate::net::api::login(credentials).await
}

/// Authentication page — the email/password form with a mode toggle.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthFormState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_toggle = move |_| {
        auth.update(AuthFormState::toggle_mode);
        email_error.set(None);
        password_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_form(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                email_error.set(errors.email);
                password_error.set(errors.password);
                return;
            }
        };
        email_error.set(None);
        password_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match submit_credentials(auth.get_untracked().mode, &credentials).await {
                    Ok(()) => {
                        email.set(String::new());
                        password.set(String::new());
                        auth.update(AuthFormState::clear_error);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(message) => {
                        auth.update(|state| state.set_error(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &navigate);
            busy.set(false);
        }
    };

    let mode = move || auth.get().mode;
    let server_error = move || auth.get().error;

    view! {
        <Layout title="Auth">
            <div class="auth-card">
                <Show when=move || server_error().is_some()>
                    <ErrorAlert
                        title="Authorization Error"
                        message=Signal::derive(move || server_error().unwrap_or_default())
                    />
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"Email*"</span>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="example@gmail.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || email_error.get().is_some()>
                            <span class="auth-field__error">
                                {move || email_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <label class="auth-field">
                        <span class="auth-field__label">"Password*"</span>
                        <span class="auth-field__hint">"Must be min 5 char"</span>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || password_error.get().is_some()>
                            <span class="auth-field__error">
                                {move || password_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <div class="auth-form__actions">
                        <button type="button" class="auth-form__toggle" on:click=on_toggle>
                            {move || mode().toggle_label()}
                        </button>
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            <IconDatabase/>
                            <span>{move || mode().submit_label()}</span>
                        </button>
                    </div>
                </form>
            </div>
        </Layout>
    }
}
