pub mod global_context;
pub mod left;
pub mod top_header;

use crate::tour::overlay::TourOverlay;
use global_context::{AppGlobalContext, PerformanceMode};
use left::sidebar::Sidebar;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Main application shell, used as the parent route view.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// |  (Left)   |         (Outlet)              |
/// +------------------------------------------+
/// ```
///
/// The shell upholds the tour's anchor contract: `app-top-header`,
/// `app-sidebar` and `app-logout` are rendered by the child components,
/// `app-content` by the content area below.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div
            class="app-layout"
            class:app-layout--reduced=move || ctx.performance_mode.get() == PerformanceMode::Reduced
        >
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <Sidebar />
                </left::Left>

                <div id="app-content" class="app-main">
                    <Outlet />
                </div>
            </div>

            <TourOverlay />
        </div>
    }
}
