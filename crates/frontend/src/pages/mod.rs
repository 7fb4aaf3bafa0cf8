//! Placeholder routed views.
//!
//! The real per-domain CRUD screens are collaborators outside this subsystem;
//! the shell only needs something to host in the content area.

use crate::navigation::breadcrumb::build;
use crate::shared::i18n;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Landing page for `/dashboard`.
#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Dashboard"</h1>
            <p class="page__hint">
                "Pick a sector in the header to unlock its management section."
            </p>
        </div>
    }
}

/// Generic placeholder for every other routed screen; titles itself from the
/// breadcrumb trail.
#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();

    let title = move || {
        build(&location.pathname.get(), i18n::t)
            .pop()
            .map(|crumb| crumb.label)
            .unwrap_or_else(|| "Dashboard".to_string())
    };

    view! {
        <div class="page">
            <h1 class="page__title">{title}</h1>
            <p class="page__hint">"Content for this section renders here."</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Not found"</h1>
            <p class="page__hint">"This address does not match any screen."</p>
        </div>
    }
}
