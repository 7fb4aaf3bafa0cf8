//! Sector-aware navigation core: menu model and composition, route matching,
//! expansion state, breadcrumbs. Everything here is pure and DOM-free; the
//! layout components inject the current path and shared state.

pub mod breadcrumb;
pub mod composer;
pub mod expansion;
pub mod menu;
pub mod modules;
pub mod route_match;
pub mod sectors;
