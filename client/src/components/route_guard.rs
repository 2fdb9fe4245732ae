//! Role-aware wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page in the route table. The gate decision is memoized, so the
//! wrapped page is only rebuilt when the decision itself changes (a profile
//! rename does not remount the page) while a logout flips it to a redirect
//! at once.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::AuthContext;
use crate::util::auth::{GuardDecision, guard_decision};

/// Redirects replace the denied entry so "back" does not bounce again.
pub(crate) fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Neutral indicator shown while the session is being restored.
#[component]
pub fn AuthPending() -> impl IntoView {
    view! {
        <div class="route-guard">
            <p class="route-guard__text">"Checking authentication..."</p>
        </div>
    }
}

/// Render `children` only when the signed-in user holds one of `roles`.
/// An empty `roles` admits any signed-in user.
#[component]
pub fn RouteGuard(#[prop(optional)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let decision = Memo::new(move |_| auth.signal().with(|state| guard_decision(state, &roles)));

    move || match decision.get() {
        GuardDecision::Wait => view! { <AuthPending/> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path options=replace_navigation()/> }.into_any(),
        GuardDecision::Allow => children().into_any(),
    }
}
