//! Pure route-to-menu matching.
//!
//! Active and expanded state is always re-derived from the current path; no
//! "selected item" is ever stored, so the highlight cannot drift from the URL.
//! All functions are O(total items) and run on every render.

use super::menu::{MenuGroup, MenuItem};
use std::collections::BTreeSet;

/// Segment-boundary prefix match: `/a` matches `/a` and `/a/b` but not `/ab`.
/// An empty prefix never matches.
pub fn path_matches(prefix: &str, current: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    current == prefix
        || (current.starts_with(prefix) && current.as_bytes().get(prefix.len()) == Some(&b'/'))
}

/// An item is active when its own path prefix-matches the current path, or
/// when any descendant's does.
pub fn is_item_active(item: &MenuItem, current: &str) -> bool {
    if item.path.is_some_and(|p| path_matches(p, current)) {
        return true;
    }
    item.children.iter().any(|child| is_item_active(child, current))
}

/// Exact-or-descendant match for a submenu entry's path.
pub fn is_submenu_active(child_path: &str, current: &str) -> bool {
    path_matches(child_path, current)
}

/// Ids of items-with-children that should start expanded for the given path:
/// any item one of whose children prefix-matches it.
pub fn initial_expanded_ids(groups: &[MenuGroup], current: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for group in groups {
        for item in &group.items {
            collect_expanded(item, current, &mut ids);
        }
    }
    ids
}

fn collect_expanded(item: &MenuItem, current: &str, ids: &mut BTreeSet<String>) {
    if item.has_children() && item.children.iter().any(|c| is_item_active(c, current)) {
        ids.insert(item.id.to_string());
    }
    for child in &item.children {
        collect_expanded(child, current, ids);
    }
}

/// Ids of items-with-children that are route-active (own path or any
/// descendant). Route changes feed these into the expansion set; unlike the
/// mount-time seed this also covers a parent reached through its own path.
pub fn route_activated_ids(groups: &[MenuGroup], current: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for group in groups {
        for item in &group.items {
            collect_activated(item, current, &mut ids);
        }
    }
    ids
}

fn collect_activated(item: &MenuItem, current: &str, ids: &mut BTreeSet<String>) {
    if item.has_children() && is_item_active(item, current) {
        ids.insert(item.id.to_string());
    }
    for child in &item.children {
        collect_activated(child, current, ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::menu::MenuItem;

    #[test]
    fn prefix_match_respects_segment_boundaries() {
        assert!(path_matches("/dashboard/gym/members", "/dashboard/gym/members"));
        assert!(path_matches("/dashboard/gym/members", "/dashboard/gym/members/42"));
        assert!(!path_matches("/dashboard/gym/members", "/dashboard/gym/membersx"));
        assert!(!path_matches("", "/dashboard"));
    }

    #[test]
    fn item_is_active_through_descendants() {
        let item = MenuItem::group(
            "reports",
            "Reports",
            "file-text",
            vec![MenuItem::leaf("sales-report", "Sales", "list", "/dashboard/reports/sales")],
        );
        assert!(is_item_active(&item, "/dashboard/reports/sales"));
        assert!(is_item_active(&item, "/dashboard/reports/sales/2024"));
        assert!(!is_item_active(&item, "/dashboard/reports"));
    }

    #[test]
    fn submenu_active_is_exact_or_descendant() {
        assert!(is_submenu_active("/dashboard/orders", "/dashboard/orders"));
        assert!(is_submenu_active("/dashboard/orders", "/dashboard/orders/7"));
        assert!(!is_submenu_active("/dashboard/orders", "/dashboard/orders7"));
    }

    #[test]
    fn initial_expansion_covers_matching_parents_only() {
        let groups = vec![crate::navigation::menu::MenuGroup {
            id: "main",
            label: "Main",
            items: vec![
                MenuItem::group(
                    "reports",
                    "Reports",
                    "file-text",
                    vec![MenuItem::leaf("sales-report", "Sales", "list", "/dashboard/reports/sales")],
                ),
                MenuItem::group(
                    "settings",
                    "Settings",
                    "settings",
                    vec![MenuItem::leaf("preferences", "Preferences", "sliders", "/dashboard/settings/preferences")],
                ),
            ],
        }];

        let ids = initial_expanded_ids(&groups, "/dashboard/reports/sales");
        assert!(ids.contains("reports"));
        assert!(!ids.contains("settings"));

        let ids = initial_expanded_ids(&groups, "/dashboard");
        assert!(ids.is_empty());
    }

    #[test]
    fn route_activation_includes_parents_reached_by_own_path() {
        let groups = vec![crate::navigation::menu::MenuGroup {
            id: "management",
            label: "Management",
            items: vec![MenuItem::group(
                "products",
                "Products",
                "package",
                vec![MenuItem::leaf("catalog", "Catalog", "list", "/dashboard/products/catalog")],
            )
            .with_path("/dashboard/products")],
        }];

        // The mount-time seed only looks at children; the route-change
        // transition also honors the parent's own path.
        assert!(!initial_expanded_ids(&groups, "/dashboard/products").contains("products"));
        assert!(route_activated_ids(&groups, "/dashboard/products").contains("products"));
        assert!(route_activated_ids(&groups, "/dashboard/products/catalog").contains("products"));
        assert!(route_activated_ids(&groups, "/dashboard").is_empty());
    }
}
