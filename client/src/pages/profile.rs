//! Profile page: account details plus the name/password edit form.
//!
//! DESIGN
//! ======
//! The name input is seeded from the signed-in user and follows later
//! context changes (for example a rename that just succeeded). Password
//! fields are optional; leaving "new password" empty keeps the current one.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::ProfileUpdate;
use crate::state::auth::AuthContext;
use crate::util::dates::{format_date, format_date_time};
use crate::util::validation::{PasswordChange, ValidationError, validate_name, validate_password_change};

const UPDATE_FAILED: &str = "Failed to update profile.";
const UPDATED: &str = "Profile updated successfully!";

/// Request body for a profile save. The name is trimmed; password fields are
/// included only for a validated change.
fn build_profile_update(name: &str, change: Option<PasswordChange>) -> ProfileUpdate {
    let (password, current_password) = match change {
        Some(PasswordChange { current, new }) => (Some(new), Some(current)),
        None => (None, None),
    };
    ProfileUpdate { name: name.trim().to_owned(), password, current_password }
}

fn prepare_profile_update(
    name: &str,
    current: &str,
    new: &str,
    confirmation: &str,
) -> Result<ProfileUpdate, ValidationError> {
    let name = validate_name(name)?;
    let change = validate_password_change(current, new, confirmation)?;
    Ok(build_profile_update(name, change))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let api = expect_context::<ApiClient>();

    let name = RwSignal::new(auth.signal().with_untracked(|s| s.user().map(|u| u.name.clone()).unwrap_or_default()));
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let user_name = Memo::new(move |_| auth.user().map(|u| u.name));
    Effect::new(move || {
        if let Some(latest) = user_name.get() {
            name.set(latest);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);

        let update = match prepare_profile_update(
            &name.get_untracked(),
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(update) => update,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_profile(&update).await {
                Ok(patch) => {
                    auth.update_user(patch);
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    success.set(Some(UPDATED.to_owned()));
                }
                Err(e) => error.set(Some(e.user_message(UPDATE_FAILED))),
            }
            busy.set(false);
        });
    };

    let email = move || auth.user().map(|u| u.email).unwrap_or_default();
    let role = move || auth.user().map(|u| u.role.as_str()).unwrap_or_default();
    let member_since = move || format_date(auth.user().and_then(|u| u.created_at).as_deref());
    let last_login = move || format_date_time(auth.user().and_then(|u| u.last_login_at).as_deref());

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h2 class="profile-card__title">"My Profile"</h2>
                <dl class="profile-card__info">
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd class="profile-card__role">{role}</dd>
                    <dt>"Member since"</dt>
                    <dd>{member_since}</dd>
                    <dt>"Last login"</dt>
                    <dd>{last_login}</dd>
                </dl>

                <form class="profile-form" on:submit=on_submit>
                    <label class="profile-form__label" for="profile-name">"Name"</label>
                    <input
                        id="profile-name"
                        class="profile-form__input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />

                    <h3 class="profile-form__section">"Change password"</h3>
                    <p class="profile-form__hint">"Leave blank to keep your current password."</p>
                    <label class="profile-form__label" for="current-password">"Current password"</label>
                    <input
                        id="current-password"
                        class="profile-form__input"
                        type="password"
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                    <label class="profile-form__label" for="new-password">"New password"</label>
                    <input
                        id="new-password"
                        class="profile-form__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <label class="profile-form__label" for="confirm-new-password">"Confirm new password"</label>
                    <input
                        id="confirm-new-password"
                        class="profile-form__input"
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />

                    <Show when=move || error.get().is_some()>
                        <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get().is_some()>
                        <p class="form-message form-message--success">{move || success.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
