//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthContext;
use crate::util::auth::{ADMIN_USERS_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};

/// Brand link plus session-dependent links. Signed-in users get a profile
/// greeting, a logout button and (admins only) the user-management link.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        auth.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    });

    let is_admin = move || auth.user().is_some_and(|u| u.role == Role::Admin);
    let greeting = move || auth.user().map(|u| format!("Hi, {} (Profile)", u.first_name())).unwrap_or_default();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">"Conectar"</a>
                <div class="navbar__links">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| {
                            view! {
                                <a href=LOGIN_PATH class="navbar__link">"Login"</a>
                                <a href=REGISTER_PATH class="btn btn--primary">"Register"</a>
                            }
                        }
                    >
                        <Show when=is_admin>
                            <a href=ADMIN_USERS_PATH class="navbar__link">"Manage users"</a>
                        </Show>
                        <a href=PROFILE_PATH class="navbar__link">{greeting}</a>
                        <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                            "Log out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
