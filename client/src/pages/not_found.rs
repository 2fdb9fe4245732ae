//! Catch-all fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2 class="not-found__title">"404"</h2>
            <p class="not-found__text">"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">"Go home"</a>
        </div>
    }
}
