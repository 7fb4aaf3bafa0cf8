//! Sector menu registries.
//!
//! Each business vertical exports a flat, ordered list of menu items under its
//! own group. The composer treats this as a static, closed table keyed by
//! sector string; at most one sector is active at a time.

use super::menu::MenuItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectorExtension {
    pub group_id: &'static str,
    pub group_label: &'static str,
    pub items: Vec<MenuItem>,
}

/// Look up the extension registered for a sector key. Unknown keys resolve to
/// `None` and no sector group is inserted.
pub fn sector_extension(key: &str) -> Option<SectorExtension> {
    match key {
        "gym-fitness" => Some(SectorExtension {
            group_id: "gym-management",
            group_label: "Gym Management",
            items: gym_fitness_items(),
        }),
        "beauty-salon" => Some(SectorExtension {
            group_id: "beauty-management",
            group_label: "Beauty Management",
            items: beauty_salon_items(),
        }),
        "events" => Some(SectorExtension {
            group_id: "events-management",
            group_label: "Events Management",
            items: events_items(),
        }),
        "ecommerce" => Some(SectorExtension {
            group_id: "ecommerce-management",
            group_label: "Ecommerce Management",
            items: ecommerce_items(),
        }),
        "hardware-store" => Some(SectorExtension {
            group_id: "hardware-management",
            group_label: "Hardware Management",
            items: hardware_store_items(),
        }),
        "marketing-agency" => Some(SectorExtension {
            group_id: "agency-management",
            group_label: "Agency Management",
            items: marketing_agency_items(),
        }),
        _ => None,
    }
}

/// Sector keys available for selection, in display order.
pub const SECTOR_KEYS: &[(&str, &str)] = &[
    ("gym-fitness", "Gym & Fitness"),
    ("beauty-salon", "Beauty Salon"),
    ("events", "Events"),
    ("ecommerce", "Ecommerce"),
    ("hardware-store", "Hardware Store"),
    ("marketing-agency", "Marketing Agency"),
];

fn gym_fitness_items() -> Vec<MenuItem> {
    let color = "#f97316";
    vec![
        MenuItem::leaf("gym-members", "Members", "users", "/dashboard/gym/members").with_color(color),
        MenuItem::leaf("gym-classes", "Classes", "calendar", "/dashboard/gym/classes").with_color(color),
        MenuItem::leaf("gym-trainers", "Trainers", "user-check", "/dashboard/gym/trainers").with_color(color),
        MenuItem::leaf("gym-memberships", "Memberships", "credit-card", "/dashboard/gym/memberships")
            .with_color(color),
        MenuItem::leaf("gym-check-ins", "Check-ins", "check-circle", "/dashboard/gym/check-ins")
            .with_color(color),
    ]
}

fn beauty_salon_items() -> Vec<MenuItem> {
    let color = "#ec4899";
    vec![
        MenuItem::leaf(
            "beauty-appointments",
            "Appointments",
            "calendar",
            "/dashboard/beauty/appointments",
        )
        .with_color(color),
        MenuItem::leaf("beauty-services", "Services", "scissors", "/dashboard/beauty/services")
            .with_color(color),
        MenuItem::leaf("beauty-stylists", "Stylists", "user-check", "/dashboard/beauty/stylists")
            .with_color(color),
        MenuItem::leaf("beauty-clients", "Clients", "users", "/dashboard/beauty/clients").with_color(color),
    ]
}

fn events_items() -> Vec<MenuItem> {
    let color = "#8b5cf6";
    vec![
        MenuItem::leaf("events-calendar", "Calendar", "calendar", "/dashboard/events/calendar")
            .with_color(color),
        MenuItem::leaf("events-venues", "Venues", "map-pin", "/dashboard/events/venues").with_color(color),
        MenuItem::leaf("events-tickets", "Tickets", "tag", "/dashboard/events/tickets").with_color(color),
        MenuItem::leaf("events-attendees", "Attendees", "users", "/dashboard/events/attendees")
            .with_color(color),
    ]
}

fn ecommerce_items() -> Vec<MenuItem> {
    let color = "#10b981";
    vec![
        MenuItem::leaf("shop-storefront", "Storefront", "store", "/dashboard/shop/storefront")
            .with_color(color),
        MenuItem::leaf("shop-inventory", "Inventory", "package", "/dashboard/shop/inventory")
            .with_color(color),
        MenuItem::leaf("shop-shipments", "Shipments", "truck", "/dashboard/shop/shipments")
            .with_color(color),
        MenuItem::leaf("shop-promotions", "Promotions", "tag", "/dashboard/shop/promotions")
            .with_color(color),
    ]
}

fn hardware_store_items() -> Vec<MenuItem> {
    let color = "#64748b";
    vec![
        MenuItem::leaf("hw-stock", "Stock", "package", "/dashboard/hardware/stock").with_color(color),
        MenuItem::leaf("hw-suppliers", "Suppliers", "truck", "/dashboard/hardware/suppliers")
            .with_color(color),
        MenuItem::leaf("hw-rentals", "Tool rentals", "wrench", "/dashboard/hardware/rentals")
            .with_color(color),
        MenuItem::leaf("hw-invoices", "Invoices", "file-text", "/dashboard/hardware/invoices")
            .with_color(color),
    ]
}

fn marketing_agency_items() -> Vec<MenuItem> {
    let color = "#eab308";
    vec![
        MenuItem::leaf("agency-campaigns", "Campaigns", "megaphone", "/dashboard/agency/campaigns")
            .with_color(color),
        MenuItem::leaf("agency-leads", "Leads", "users", "/dashboard/agency/leads").with_color(color),
        MenuItem::leaf("agency-creatives", "Creatives", "image", "/dashboard/agency/creatives")
            .with_color(color),
        MenuItem::leaf("agency-billing", "Billing", "credit-card", "/dashboard/agency/billing")
            .with_color(color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_sector_resolves() {
        for (key, _) in SECTOR_KEYS {
            let ext = sector_extension(key).expect("registered sector must resolve");
            assert!(!ext.items.is_empty());
            for item in &ext.items {
                assert!(item.path.is_some(), "sector item '{}' must be navigable", item.id);
            }
        }
    }

    #[test]
    fn unknown_sector_resolves_to_none() {
        assert!(sector_extension("space-tourism").is_none());
        assert!(sector_extension("").is_none());
    }
}
