//! Admin user listing with server-side filter/sort and client-side search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through a `RouteGuard` requiring the admin role. The role
//! filter and sort controls are sent to `GET /users`; the search box narrows
//! the fetched rows locally without another request.
//!
//! TRADE-OFFS
//! ==========
//! Every control change issues a fresh request. Responses are tagged with a
//! generation number and a stale one (superseded by a later control change)
//! is dropped. Deletes are independent requests; each removes only its own
//! row when it completes.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::net::api::ApiClient;
use crate::net::types::{Role, SortField, SortOrder, User, UserListQuery};
use crate::state::auth::AuthContext;
use crate::util::dates::{format_date, format_date_time, is_inactive};

const LOAD_FAILED: &str = "Failed to load users.";
const DELETE_FAILED: &str = "Failed to delete user.";

/// Case-insensitive substring match on name or email. A blank term matches
/// every user.
fn matches_search(user: &User, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
}

fn filter_users(users: &[User], term: &str) -> Vec<User> {
    users.iter().filter(|u| matches_search(u, term)).cloned().collect()
}

/// Drop the row with `user_id`. Returns whether a row was removed.
fn remove_user(users: &mut Vec<User>, user_id: &str) -> bool {
    let before = users.len();
    users.retain(|u| u.id != user_id);
    users.len() != before
}

/// Role select value; the empty option means "all roles".
fn role_filter(raw: &str) -> Option<Role> {
    Role::parse(raw)
}

fn status_badge(inactive: bool) -> (&'static str, &'static str) {
    if inactive { ("badge badge--inactive", "Inactive") } else { ("badge badge--active", "Active") }
}

fn delete_prompt(user: &User) -> String {
    format!("Delete {} ({})? This cannot be undone.", user.name, user.email)
}

#[cfg(feature = "hydrate")]
fn confirm_delete(user: &User) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&delete_prompt(user)).ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn confirm_delete(user: &User) -> bool {
    let _ = delete_prompt(user);
    false
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let api = expect_context::<ApiClient>();

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);
    let sort_by = RwSignal::new(SortField::default());
    let order = RwSignal::new(SortOrder::default());
    let generation = StoredValue::new(0_u64);

    let fetch_api = api.clone();
    Effect::new(move || {
        let query = UserListQuery { role: role.get(), sort_by: Some(sort_by.get()), order: Some(order.get()) };
        let ticket = generation.get_value() + 1;
        generation.set_value(ticket);
        loading.set(true);
        error.set(None);

        let api = fetch_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_users(&query).await;
            if generation.get_value() != ticket {
                return;
            }
            match result {
                Ok(list) => users.set(list),
                Err(e) => error.set(Some(e.user_message(LOAD_FAILED))),
            }
            loading.set(false);
        });
    });

    let on_delete = Callback::new(move |user: User| {
        if !confirm_delete(&user) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_user(&user.id).await {
                Ok(()) => {
                    users.update(|list| {
                        remove_user(list, &user.id);
                    });
                }
                Err(e) => error.set(Some(e.user_message(DELETE_FAILED))),
            }
        });
    });

    let visible = move || users.with(|list| filter_users(list, &search.get()));
    let self_id = move || auth.user().map(|u| u.id);

    view! {
        <div class="admin-users">
            <header class="admin-users__header">
                <h2 class="admin-users__title">"User Management"</h2>
            </header>

            <div class="admin-users__controls">
                <input
                    class="admin-users__search"
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="admin-users__select"
                    on:change=move |ev| role.set(role_filter(&event_target_value(&ev)))
                >
                    <option value="" selected=move || role.get().is_none()>"All roles"</option>
                    <option value="admin" selected=move || role.get() == Some(Role::Admin)>"Admin"</option>
                    <option value="user" selected=move || role.get() == Some(Role::User)>"User"</option>
                </select>
                <select
                    class="admin-users__select"
                    on:change=move |ev| {
                        if let Some(field) = SortField::parse(&event_target_value(&ev)) {
                            sort_by.set(field);
                        }
                    }
                >
                    <option value="createdAt" selected=move || sort_by.get() == SortField::CreatedAt>"Created"</option>
                    <option value="name" selected=move || sort_by.get() == SortField::Name>"Name"</option>
                </select>
                <select
                    class="admin-users__select"
                    on:change=move |ev| {
                        if let Some(next) = SortOrder::parse(&event_target_value(&ev)) {
                            order.set(next);
                        }
                    }
                >
                    <option value="DESC" selected=move || order.get() == SortOrder::Desc>"Descending"</option>
                    <option value="ASC" selected=move || order.get() == SortOrder::Asc>"Ascending"</option>
                </select>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p class="admin-users__loading">"Loading users..."</p> }>
                <table class="admin-users__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Created"</th>
                            <th>"Last login"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="admin-users__empty" colspan="7">"No users found."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let now = OffsetDateTime::now_utc();
                            let me = self_id();
                            rows.into_iter()
                                .map(|user| {
                                    let inactive = is_inactive(&user, now);
                                    let is_self = me.as_deref() == Some(user.id.as_str());
                                    let created = format_date(user.created_at.as_deref());
                                    let last_login = format_date_time(user.last_login_at.as_deref());
                                    let (status_class, status_label) = status_badge(inactive);
                                    let row_class = if inactive {
                                        "admin-users__row admin-users__row--inactive"
                                    } else {
                                        "admin-users__row"
                                    };
                                    let row_user = user.clone();
                                    view! {
                                        <tr class=row_class>
                                            <td>{user.name}</td>
                                            <td>{user.email}</td>
                                            <td class="admin-users__role">{user.role.as_str()}</td>
                                            <td>{created}</td>
                                            <td>{last_login}</td>
                                            <td>
                                                <span class=status_class>{status_label}</span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--danger btn--small"
                                                    disabled=is_self
                                                    on:click=move |_| on_delete.run(row_user.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
