//! Step table for the onboarding tour.
//!
//! The four steps anchor to fixed shell regions. Tooltip offset and arrow
//! direction are bespoke per step, so they live here as metadata rather than
//! being derived from geometry.

use super::anchors::AnchorId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// To the right of the anchor, vertically centered (sidebar step).
    RightOf,
    /// Below the anchor, aligned to its right edge (header step).
    Below,
    /// Centered over the anchor (content step).
    Centered,
    /// To the left of the anchor (logout step).
    LeftOf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Up,
    None,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub description: &'static str,
    pub anchor: AnchorId,
    pub placement: TooltipPlacement,
    pub arrow: ArrowDirection,
}

pub const STEPS: &[TourStep] = &[
    TourStep {
        title: "Navigation",
        description: "Browse your workspaces here. Selecting a sector adds its own menu section.",
        anchor: AnchorId::Sidebar,
        placement: TooltipPlacement::RightOf,
        arrow: ArrowDirection::Left,
    },
    TourStep {
        title: "Header",
        description: "Breadcrumbs, sector selection and quick actions live in the top bar.",
        anchor: AnchorId::Header,
        placement: TooltipPlacement::Below,
        arrow: ArrowDirection::Up,
    },
    TourStep {
        title: "Workspace",
        description: "Every screen you open renders in this area.",
        anchor: AnchorId::Content,
        placement: TooltipPlacement::Centered,
        arrow: ArrowDirection::None,
    },
    TourStep {
        title: "Sign out",
        description: "End your session from here at any time.",
        anchor: AnchorId::Logout,
        placement: TooltipPlacement::LeftOf,
        arrow: ArrowDirection::Right,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_table_covers_all_four_anchors() {
        let anchors: Vec<AnchorId> = STEPS.iter().map(|s| s.anchor).collect();
        assert_eq!(
            anchors,
            vec![AnchorId::Sidebar, AnchorId::Header, AnchorId::Content, AnchorId::Logout]
        );
    }
}
