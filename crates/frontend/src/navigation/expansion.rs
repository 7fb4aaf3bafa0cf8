//! Expanded-menu state, modeled as an explicit reducer.
//!
//! The set is seeded once from the route at mount. After that only two events
//! touch it: a user click flips membership, and a route change that activates
//! a collapsed ancestor inserts it. Nothing ever removes an id except the
//! user's own toggle, which is why a group stays open after navigating away.

use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpansionEvent {
    UserToggle(String),
    RouteActivated(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedMenu {
    ids: BTreeSet<String>,
}

impl ExpandedMenu {
    pub fn seeded(ids: BTreeSet<String>) -> Self {
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn apply(&mut self, event: ExpansionEvent) {
        match event {
            ExpansionEvent::UserToggle(id) => {
                if !self.ids.remove(&id) {
                    self.ids.insert(id);
                }
            }
            ExpansionEvent::RouteActivated(id) => {
                self.ids.insert(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_toggle_flips_membership() {
        let mut menu = ExpandedMenu::default();
        menu.apply(ExpansionEvent::UserToggle("reports".into()));
        assert!(menu.contains("reports"));
        menu.apply(ExpansionEvent::UserToggle("reports".into()));
        assert!(!menu.contains("reports"));
    }

    #[test]
    fn route_activation_only_ever_inserts() {
        let mut menu = ExpandedMenu::default();
        menu.apply(ExpansionEvent::RouteActivated("reports".into()));
        assert!(menu.contains("reports"));
        // Navigating elsewhere re-activates other items but never removes.
        menu.apply(ExpansionEvent::RouteActivated("settings".into()));
        assert!(menu.contains("reports"));
        assert!(menu.contains("settings"));
        // Repeated activation is a no-op.
        menu.apply(ExpansionEvent::RouteActivated("reports".into()));
        assert!(menu.contains("reports"));
    }

    #[test]
    fn seeded_state_is_preserved() {
        let menu = ExpandedMenu::seeded(BTreeSet::from(["reports".to_string()]));
        assert!(menu.contains("reports"));
        assert!(!menu.contains("settings"));
    }
}
