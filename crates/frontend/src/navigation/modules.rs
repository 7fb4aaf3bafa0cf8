//! Per-module visibility gating for menu items.
//!
//! Visibility policy, made explicit instead of an implicit fallback chain:
//! - an item with no entry in the gate table is `Ungated` and always visible
//!   (fail-open - items not subject to gating are never hidden by omission);
//! - an item mapped to a module is visible only when that module's flag is
//!   `true`; a module id absent from the flag map counts as disabled
//!   (fail-closed for known-but-unregistered modules).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Feature flags owned by shared application state; read-only here.
pub type ModuleFlags = HashMap<String, bool>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Not subject to module gating; always visible.
    Ungated,
    /// Visible only while the named module is enabled.
    Module(&'static str),
}

static GATE_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Base menu
        ("finance", "finance"),
        ("integrations", "integrations"),
        ("audit-log", "audit"),
        // Sector items with their own switchable modules
        ("gym-classes", "class-scheduling"),
        ("gym-check-ins", "attendance"),
        ("beauty-appointments", "appointments"),
        ("shop-promotions", "promotions"),
        ("agency-billing", "billing"),
    ])
});

pub fn gate_for(item_id: &str) -> Gate {
    match GATE_TABLE.get(item_id) {
        Some(module_id) => Gate::Module(module_id),
        None => Gate::Ungated,
    }
}

pub fn is_visible(item_id: &str, flags: &ModuleFlags) -> bool {
    match gate_for(item_id) {
        Gate::Ungated => true,
        Gate::Module(module_id) => flags.get(module_id).copied().unwrap_or(false),
    }
}

/// Default flag set for a fresh session: every known module switched on.
pub fn default_flags() -> ModuleFlags {
    GATE_TABLE
        .values()
        .map(|module_id| (module_id.to_string(), true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_item_is_always_visible() {
        let flags = ModuleFlags::new();
        assert_eq!(gate_for("customers"), Gate::Ungated);
        assert!(is_visible("customers", &flags));
    }

    #[test]
    fn mapped_item_follows_module_flag() {
        let mut flags = ModuleFlags::new();
        flags.insert("finance".to_string(), true);
        assert!(is_visible("finance", &flags));
        flags.insert("finance".to_string(), false);
        assert!(!is_visible("finance", &flags));
    }

    #[test]
    fn mapped_item_with_unregistered_module_is_hidden() {
        // Known gate, but the flag map has no entry for the module: fail-closed.
        let flags = ModuleFlags::new();
        assert_eq!(gate_for("audit-log"), Gate::Module("audit"));
        assert!(!is_visible("audit-log", &flags));
    }

    #[test]
    fn default_flags_enable_every_known_module() {
        let flags = default_flags();
        assert!(is_visible("finance", &flags));
        assert!(is_visible("audit-log", &flags));
        assert!(is_visible("gym-classes", &flags));
    }
}
