//! Fallback view for paths no route matches.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    #[cfg(feature = "hydrate")]
    log::warn!("404: no route for {}", location.pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <p class="muted small">{move || location.pathname.get()}</p>
            <a class="accent" href=AppRoute::Root.path()>"Return to Home"</a>
        </div>
    }
}
