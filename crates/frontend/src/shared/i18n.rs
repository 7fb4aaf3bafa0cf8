//! Static label dictionary.
//!
//! Consumed as a black box by the breadcrumb builder and header: a pure,
//! synchronous lookup from camelCase key to display label. Missing keys are
//! not an error - callers fall back to prettifying the raw route segment.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("dashboard", "Dashboard"),
        ("analytics", "Analytics"),
        ("reports", "Reports"),
        ("sales", "Sales"),
        ("activity", "Activity"),
        ("customers", "Customers"),
        ("products", "Products"),
        ("catalog", "Catalog"),
        ("categories", "Categories"),
        ("orders", "Orders"),
        ("finance", "Finance"),
        ("integrations", "Integrations"),
        ("settings", "Settings"),
        ("accessControl", "Access Control"),
        ("preferences", "Preferences"),
        ("auditLog", "Audit Log"),
        ("gym", "Gym"),
        ("members", "Members"),
        ("classes", "Classes"),
        ("trainers", "Trainers"),
        ("memberships", "Memberships"),
        ("beauty", "Beauty Salon"),
        ("appointments", "Appointments"),
        ("services", "Services"),
        ("stylists", "Stylists"),
        ("clients", "Clients"),
        ("events", "Events"),
        ("calendar", "Calendar"),
        ("venues", "Venues"),
        ("tickets", "Tickets"),
        ("attendees", "Attendees"),
        ("shop", "Shop"),
        ("storefront", "Storefront"),
        ("inventory", "Inventory"),
        ("shipments", "Shipments"),
        ("promotions", "Promotions"),
        ("hardware", "Hardware Store"),
        ("stock", "Stock"),
        ("suppliers", "Suppliers"),
        ("invoices", "Invoices"),
        ("agency", "Agency"),
        ("campaigns", "Campaigns"),
        ("leads", "Leads"),
        ("creatives", "Creatives"),
        ("billing", "Billing"),
    ])
});

pub fn t(key: &str) -> Option<String> {
    LABELS.get(key).map(|label| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(t("accessControl"), Some("Access Control".to_string()));
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert_eq!(t("rentals"), None);
        assert_eq!(t(""), None);
    }
}
