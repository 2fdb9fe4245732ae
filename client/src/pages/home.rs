//! `/`: sends the visitor to the page that fits their session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::route_guard::{AuthPending, replace_navigation};
use crate::state::auth::AuthContext;
use crate::util::auth::home_path;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let target = Memo::new(move |_| auth.signal().with(home_path));

    move || match target.get() {
        Some(path) => view! { <Redirect path=path options=replace_navigation()/> }.into_any(),
        None => view! { <AuthPending/> }.into_any(),
    }
}
