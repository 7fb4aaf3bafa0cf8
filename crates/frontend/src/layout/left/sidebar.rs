//! Sidebar: renders the composed, sector-aware menu tree.
//!
//! Active and expanded highlighting is re-derived from the current path on
//! every render; the only state owned here is the one-way expansion set.
//! Leaves are plain anchors - the router intercepts same-origin clicks.

use crate::layout::global_context::AppGlobalContext;
use crate::navigation::composer::compose;
use crate::navigation::expansion::{ExpandedMenu, ExpansionEvent};
use crate::navigation::menu::{base_groups, MenuItem};
use crate::navigation::route_match::{
    initial_expanded_ids, is_item_active, is_submenu_active, route_activated_ids,
};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;

    // Composition is pure, so it memoizes safely on (sector, flags).
    let groups = Memo::new(move |_| {
        let sector = ctx.selected_sector.get();
        let flags = ctx.enabled_modules.get();
        compose(&base_groups(), sector.as_deref(), &flags)
    });

    // Seeded once from the route at mount; afterwards only reducer events
    // touch it.
    let expanded = RwSignal::new(ExpandedMenu::seeded(initial_expanded_ids(
        &groups.get_untracked(),
        &pathname.get_untracked(),
    )));

    // Route changes expand newly-active ancestors and never collapse anything.
    Effect::new(move |_| {
        let path = pathname.get();
        for id in route_activated_ids(&groups.get(), &path) {
            if !expanded.with_untracked(|e| e.contains(&id)) {
                expanded.update(|e| e.apply(ExpansionEvent::RouteActivated(id)));
            }
        }
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                let path = pathname.get();
                let expanded_now = expanded.get();
                groups
                    .get()
                    .into_iter()
                    .map(|group| {
                        let items = group
                            .items
                            .into_iter()
                            .map(|item| item_view(item, &path, &expanded_now, expanded))
                            .collect_view();
                        view! {
                            <div class="app-sidebar__group">
                                <div class="app-sidebar__group-label">{group.label}</div>
                                {items}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn item_view(
    item: MenuItem,
    path: &str,
    expanded_now: &ExpandedMenu,
    expanded: RwSignal<ExpandedMenu>,
) -> AnyView {
    if item.has_children() {
        // Expandable group header: clicking toggles, never navigates, even
        // when the item also carries a path.
        let active = is_item_active(&item, path);
        let is_open = expanded_now.contains(item.id);
        let id = item.id.to_string();
        let children = item
            .children
            .into_iter()
            .map(|child| leaf_view(child, path, true))
            .collect_view();

        view! {
            <div>
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=active
                    on:click=move |_| {
                        expanded.update(|e| e.apply(ExpansionEvent::UserToggle(id.clone())));
                    }
                >
                    <div class="app-sidebar__item-content" style:color=item.color.unwrap_or_default()>
                        {icon(item.icon)}
                        <span>{item.label}</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=is_open
                    >
                        {icon("chevron-right")}
                    </div>
                </div>
                {is_open.then(|| view! {
                    <div class="app-sidebar__children">{children}</div>
                })}
            </div>
        }
        .into_any()
    } else {
        leaf_view(item, path, false)
    }
}

fn leaf_view(item: MenuItem, path: &str, nested: bool) -> AnyView {
    let active = item.path.map(|p| is_submenu_active(p, path)).unwrap_or(false);

    view! {
        <a
            class="app-sidebar__item"
            class:app-sidebar__item--child=nested
            class:app-sidebar__item--active=active
            href=item.path.unwrap_or("#")
        >
            <div class="app-sidebar__item-content" style:color=item.color.unwrap_or_default()>
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
            {item.badge.map(|badge| view! {
                <span class="app-sidebar__badge">{badge}</span>
            })}
        </a>
    }
    .into_any()
}
