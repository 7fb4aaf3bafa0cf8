//! Menu tree model and the static base menu registry.
//!
//! Items are built once per compose call from static registries and never
//! mutated afterwards. An item carries a `path` (navigable leaf), a non-empty
//! `children` list (expandable group), or both (click expands, does not
//! navigate) - never neither.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: Option<&'static str>,
    pub path: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn leaf(id: &'static str, label: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label,
            icon,
            color: None,
            path: Some(path),
            badge: None,
            children: Vec::new(),
        }
    }

    pub fn group(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            color: None,
            path: None,
            badge: None,
            children,
        }
    }

    pub fn with_badge(mut self, badge: &'static str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_path(mut self, path: &'static str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Group of menu items. Groups render top-to-bottom in array order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

/// Base menu shared by every tenant, before sector insertion and module
/// filtering.
pub fn base_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "main",
            label: "Main",
            items: vec![
                MenuItem::leaf("overview", "Overview", "layout-dashboard", "/dashboard"),
                MenuItem::leaf("analytics", "Analytics", "bar-chart", "/dashboard/analytics"),
                MenuItem::group(
                    "reports",
                    "Reports",
                    "file-text",
                    vec![
                        MenuItem::leaf("sales-report", "Sales", "trending-up", "/dashboard/reports/sales"),
                        MenuItem::leaf(
                            "activity-report",
                            "Activity",
                            "activity",
                            "/dashboard/reports/activity",
                        ),
                    ],
                ),
            ],
        },
        MenuGroup {
            id: "management",
            label: "Management",
            items: vec![
                MenuItem::leaf("customers", "Customers", "users", "/dashboard/customers"),
                // Has both a path and children: clicking toggles expansion,
                // navigation happens only through the children.
                MenuItem::group(
                    "products",
                    "Products",
                    "package",
                    vec![
                        MenuItem::leaf("catalog", "Catalog", "list", "/dashboard/products/catalog"),
                        MenuItem::leaf("categories", "Categories", "tag", "/dashboard/products/categories"),
                    ],
                )
                .with_path("/dashboard/products"),
                MenuItem::leaf("orders", "Orders", "shopping-cart", "/dashboard/orders").with_badge("12"),
                MenuItem::leaf("finance", "Finance", "credit-card", "/dashboard/finance"),
                MenuItem::leaf("integrations", "Integrations", "plug", "/dashboard/integrations"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            items: vec![
                MenuItem::group(
                    "settings",
                    "Settings",
                    "settings",
                    vec![
                        MenuItem::leaf(
                            "access-control",
                            "Access control",
                            "shield",
                            "/dashboard/settings/access-control",
                        ),
                        MenuItem::leaf(
                            "preferences",
                            "Preferences",
                            "sliders",
                            "/dashboard/settings/preferences",
                        ),
                    ],
                ),
                MenuItem::leaf("audit-log", "Audit log", "clipboard", "/dashboard/audit-log"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_items_have_path_or_children() {
        fn check(item: &MenuItem) {
            assert!(
                item.path.is_some() || item.has_children(),
                "item '{}' is neither navigable nor expandable",
                item.id
            );
            for child in &item.children {
                check(child);
            }
        }
        for group in base_groups() {
            assert!(!group.items.is_empty());
            for item in &group.items {
                check(item);
            }
        }
    }

    #[test]
    fn base_item_ids_are_unique() {
        fn collect(items: &[MenuItem], out: &mut Vec<&'static str>) {
            for item in items {
                out.push(item.id);
                collect(&item.children, out);
            }
        }
        let mut ids = Vec::new();
        for group in base_groups() {
            collect(&group.items, &mut ids);
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
