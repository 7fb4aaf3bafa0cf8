use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible sidebar zone. Carries the tour anchor id for the sidebar
/// region, so it must stay mounted even while collapsed.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <div id="app-sidebar" data-zone="left" class="left" class:left--collapsed=is_collapsed>
            {children()}
        </div>
    }
}
