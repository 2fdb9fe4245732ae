//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the three shared pieces every page relies on: the auth signal
//! (wrapped in `AuthContext`), the `ApiClient`, and the route table. The API
//! client's auth-failure hook is subscribed here to `AuthContext::logout`, so
//! a 401 from any request collapses the session in memory and in storage.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::pages::{
    admin_users::AdminUsersPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::auth::{AuthContext, AuthState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AuthState::default());
    let auth = AuthContext::new(state);
    let api = ApiClient::from_build_env().on_unauthorized(Callback::new(move |()| auth.logout()));

    provide_context(state);
    provide_context(auth);
    provide_context(api.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut store = crate::util::session_store::LocalStorageStore;
        let restored = crate::state::auth::restore(&mut store, || api.fetch_profile()).await;
        auth.finish_restore(restored);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <Stylesheet id="leptos" href="/pkg/conectar.css"/>
        <Title text="Conectar"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RouteGuard><ProfilePage/></RouteGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <RouteGuard roles=vec![Role::Admin]><AdminUsersPage/></RouteGuard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
