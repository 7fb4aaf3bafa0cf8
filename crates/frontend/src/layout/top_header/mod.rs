//! TopHeader - application top bar.
//!
//! Sidebar toggle, breadcrumbs, sector selection, performance mode switch and
//! the logout control. The header root and the logout button carry two of the
//! four tour anchor ids.

pub mod breadcrumbs;

use crate::layout::global_context::{AppGlobalContext, PerformanceMode};
use crate::navigation::sectors::SECTOR_KEYS;
use crate::shared::icons::icon;
use breadcrumbs::Breadcrumbs;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let toggle_performance = move |_| {
        let next = match ctx.performance_mode.get_untracked() {
            PerformanceMode::Full => PerformanceMode::Reduced,
            PerformanceMode::Reduced => PerformanceMode::Full,
        };
        ctx.set_performance_mode(next);
    };

    let on_sector_change = move |ev| {
        let value = event_target_value(&ev);
        let sector = (!value.is_empty()).then_some(value);
        ctx.set_selected_sector(sector);
    };

    let is_sidebar_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <div id="app-top-header" class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_collapsed() { "Show navigation" } else { "Hide navigation" }
                >
                    {move || if is_sidebar_collapsed() {
                        icon("panel-left-open")
                    } else {
                        icon("panel-left-close")
                    }}
                </button>
                <span class="top-header__title">"Sector Dashboard"</span>
                <Breadcrumbs />
            </div>

            <div class="top-header__actions">
                <select class="top-header__sector" on:change=on_sector_change>
                    <option value="" selected=move || ctx.selected_sector.get().is_none()>
                        "No sector"
                    </option>
                    {SECTOR_KEYS
                        .iter()
                        .map(|(key, label)| {
                            let key = *key;
                            view! {
                                <option
                                    value=key
                                    selected=move || ctx.selected_sector.get().as_deref() == Some(key)
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--on=move || {
                        ctx.performance_mode.get() == PerformanceMode::Reduced
                    }
                    on:click=toggle_performance
                    title="Toggle reduced motion"
                >
                    {icon("zap")}
                </button>

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>"Guest"</span>
                </div>

                <button id="app-logout" class="top-header__icon-btn" title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
