use crate::navigation::breadcrumb::build;
use crate::shared::i18n;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Breadcrumb trail derived from the current path. Renders nothing at the
/// root path.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="breadcrumbs">
            {move || {
                let crumbs = build(&location.pathname.get(), i18n::t);
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        if idx == last {
                            view! {
                                <span class="breadcrumbs__current">{crumb.label}</span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <span class="breadcrumbs__segment">
                                    <A href=crumb.path>{crumb.label}</A>
                                    <span class="breadcrumbs__separator">"/"</span>
                                </span>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
