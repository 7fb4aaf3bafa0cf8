//! Anchor registration and measurement.
//!
//! The shell guarantees four fixed element ids; the coordinator measures them
//! through the `AnchorRects` trait instead of ambient DOM lookups, so the
//! phase logic stays testable without a renderer. A missing element resolves
//! to `None` - the overlay keeps its previous rectangle and never panics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorId {
    Sidebar,
    Header,
    Content,
    Logout,
}

impl AnchorId {
    /// Element id the shell renders for this anchor.
    pub fn element_id(&self) -> &'static str {
        match self {
            AnchorId::Sidebar => "app-sidebar",
            AnchorId::Header => "app-top-header",
            AnchorId::Content => "app-content",
            AnchorId::Logout => "app-logout",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

pub trait AnchorRects {
    fn measure(&self, anchor: AnchorId) -> Option<Rect>;
}

/// Production measurement: resolve the anchor's element id in the document
/// and read its bounding client rectangle.
#[derive(Clone, Copy, Default)]
pub struct DomAnchorRects;

impl AnchorRects for DomAnchorRects {
    fn measure(&self, anchor: AnchorId) -> Option<Rect> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(anchor.element_id())?;
        let rect = element.get_bounding_client_rect();
        Some(Rect {
            x: rect.x(),
            y: rect.y(),
            w: rect.width(),
            h: rect.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRects(Option<Rect>);

    impl AnchorRects for StubRects {
        fn measure(&self, _anchor: AnchorId) -> Option<Rect> {
            self.0
        }
    }

    #[test]
    fn element_ids_are_distinct() {
        let ids = [
            AnchorId::Sidebar.element_id(),
            AnchorId::Header.element_id(),
            AnchorId::Content.element_id(),
            AnchorId::Logout.element_id(),
        ];
        let mut deduped = ids.to_vec();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn missing_anchor_measures_to_none() {
        let rects = StubRects(None);
        assert_eq!(rects.measure(AnchorId::Content), None);
    }

    #[test]
    fn stubbed_measurement_round_trips() {
        let rect = Rect { x: 4.0, y: 8.0, w: 100.0, h: 50.0 };
        let rects = StubRects(Some(rect));
        assert_eq!(rects.measure(AnchorId::Sidebar), Some(rect));
    }
}
