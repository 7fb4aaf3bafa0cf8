//! Sector-aware, module-filtered menu composition.
//!
//! Pure function of its inputs: equal inputs yield a structurally equal tree,
//! so callers can memoize the result safely. Input groups are never mutated.

use super::menu::{MenuGroup, MenuItem};
use super::modules::{self, ModuleFlags};
use super::sectors::sector_extension;

/// Build the full menu: base groups, plus the selected sector's group inserted
/// right after the first group, with every item filtered through module
/// gating. Groups left without items are dropped entirely.
pub fn compose(
    base: &[MenuGroup],
    selected_sector: Option<&str>,
    flags: &ModuleFlags,
) -> Vec<MenuGroup> {
    let mut groups: Vec<MenuGroup> = base.to_vec();

    if let Some(ext) = selected_sector.and_then(sector_extension) {
        let items = ext
            .items
            .into_iter()
            // Sector items are always flat leaves, never nested.
            .map(|item| MenuItem {
                children: Vec::new(),
                ..item
            })
            .collect();
        let group = MenuGroup {
            id: ext.group_id,
            label: ext.group_label,
            items,
        };
        let at = groups.len().min(1);
        groups.insert(at, group);
    }

    groups
        .into_iter()
        .map(|group| MenuGroup {
            items: group
                .items
                .into_iter()
                .filter(|item| modules::is_visible(item.id, flags))
                .collect(),
            ..group
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::menu::base_groups;
    use crate::navigation::modules::default_flags;

    fn item(id: &'static str, path: &'static str) -> MenuItem {
        MenuItem::leaf(id, id, "list", path)
    }

    fn small_base() -> Vec<MenuGroup> {
        vec![MenuGroup {
            id: "main",
            label: "Main",
            items: vec![item("overview", "/dashboard"), item("finance", "/dashboard/finance")],
        }]
    }

    #[test]
    fn composition_is_pure_and_does_not_mutate_input() {
        let base = base_groups();
        let snapshot = base.clone();
        let flags = default_flags();

        let first = compose(&base, Some("gym-fitness"), &flags);
        let second = compose(&base, Some("gym-fitness"), &flags);

        assert_eq!(first, second);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn no_sector_selected_inserts_nothing() {
        let flags = default_flags();
        let out = compose(&small_base(), None, &flags);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "main");
    }

    #[test]
    fn sectors_are_exclusive() {
        let flags = default_flags();
        let gym = compose(&small_base(), Some("gym-fitness"), &flags);
        let beauty = compose(&small_base(), Some("beauty-salon"), &flags);

        assert!(gym.iter().any(|g| g.id == "gym-management"));
        assert!(!gym.iter().any(|g| g.id == "beauty-management"));
        assert!(beauty.iter().any(|g| g.id == "beauty-management"));
        assert!(!beauty.iter().any(|g| g.id == "gym-management"));
    }

    #[test]
    fn unknown_sector_is_skipped() {
        let flags = default_flags();
        let out = compose(&small_base(), Some("space-tourism"), &flags);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn sector_group_lands_at_index_one() {
        let flags = default_flags();
        let out = compose(&base_groups(), Some("ecommerce"), &flags);
        assert_eq!(out[0].id, "main");
        assert_eq!(out[1].id, "ecommerce-management");
    }

    #[test]
    fn sector_items_are_forced_flat() {
        let flags = default_flags();
        let out = compose(&small_base(), Some("hardware-store"), &flags);
        let sector = out.iter().find(|g| g.id == "hardware-management").unwrap();
        assert!(sector.items.iter().all(|i| i.children.is_empty()));
    }

    #[test]
    fn disabled_module_hides_item_and_empty_groups_are_dropped() {
        let mut flags = default_flags();
        flags.insert("finance".to_string(), false);

        let out = compose(&small_base(), None, &flags);
        let main = &out[0];
        assert!(main.items.iter().any(|i| i.id == "overview"));
        assert!(!main.items.iter().any(|i| i.id == "finance"));

        // A group whose items are all filtered out disappears entirely.
        let gated_only = vec![MenuGroup {
            id: "money",
            label: "Money",
            items: vec![item("finance", "/dashboard/finance")],
        }];
        let out = compose(&gated_only, None, &flags);
        assert!(out.is_empty());
    }

    #[test]
    fn spec_scenario_gym_sector_with_disabled_module() {
        // base = [{main, [overview, finance]}], gym sector active, finance off.
        let mut flags = default_flags();
        flags.insert("finance".to_string(), false);

        let out = compose(&small_base(), Some("gym-fitness"), &flags);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "main");
        assert_eq!(out[0].items.len(), 1);
        assert_eq!(out[0].items[0].id, "overview");
        assert_eq!(out[1].id, "gym-management");
        assert_eq!(out[1].items.first().map(|i| i.id), Some("gym-members"));
    }
}
