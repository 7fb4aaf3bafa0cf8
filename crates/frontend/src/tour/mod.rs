//! Guided onboarding tour: phase machine, step metadata, anchor measurement
//! and the overlay component. Best-effort UI affordance - a missing anchor
//! degrades to an unpositioned step, never a panic.

pub mod anchors;
pub mod coordinator;
pub mod overlay;
pub mod steps;
