//! Registration page: creates an account, then sends the visitor to login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::util::auth::LOGIN_PATH;
use crate::util::validation::{ValidationError, validate_registration};

const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const REGISTERED: &str = "Account created! Redirecting to login...";
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u32 = 3_000;

/// Validate the form and build the request body. Name and email are trimmed.
fn prepare_registration(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<RegisterRequest, ValidationError> {
    validate_registration(password, confirmation)?;
    Ok(RegisterRequest { name: name.trim().to_owned(), email: email.trim().to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);

        let account = match prepare_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(account) => account,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&account).await {
                Ok(()) => {
                    success.set(Some(REGISTERED.to_owned()));
                    busy.set(false);
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.user_message(REGISTER_FAILED)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="name">"Full name"</label>
                    <input
                        id="name"
                        class="auth-form__input"
                        type="text"
                        required
                        placeholder="Your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="email-register">"Email"</label>
                    <input
                        id="email-register"
                        class="auth-form__input"
                        type="email"
                        required
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password-register">"Password"</label>
                    <input
                        id="password-register"
                        class="auth-form__input"
                        type="password"
                        required
                        minlength="8"
                        placeholder="At least 8 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        class="auth-form__input"
                        type="password"
                        required
                        placeholder="Repeat the password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get().is_some()>
                        <p class="form-message form-message--success">{move || success.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
