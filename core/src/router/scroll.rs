//! Where to scroll after a navigation.

use serde::{Deserialize, Serialize};

/// Height of the fixed site header; anchors land just below it.
pub const HEADER_OFFSET: u32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScrollTarget {
    /// Back/forward: restore where the visitor was.
    Restore(ScrollPosition),
    /// Smooth-scroll to the element matching `selector` (the URL hash).
    Anchor {
        selector: String,
        top_offset: u32,
        smooth: bool,
    },
    TopLeft,
}

/// `saved` is only present for history traversals.
pub fn scroll_target(hash: &str, saved: Option<ScrollPosition>) -> ScrollTarget {
    if let Some(position) = saved {
        return ScrollTarget::Restore(position);
    }
    if hash.len() > 1 {
        return ScrollTarget::Anchor {
            selector: hash.to_string(),
            top_offset: HEADER_OFFSET,
            smooth: true,
        };
    }
    ScrollTarget::TopLeft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_position_wins() {
        let saved = ScrollPosition {
            left: 0.0,
            top: 640.0,
        };
        assert_eq!(scroll_target("#faq", Some(saved)), ScrollTarget::Restore(saved));
    }

    #[test]
    fn hash_scrolls_below_header() {
        assert_eq!(
            scroll_target("#faq", None),
            ScrollTarget::Anchor {
                selector: "#faq".to_string(),
                top_offset: 96,
                smooth: true,
            }
        );
    }

    #[test]
    fn otherwise_top_left() {
        assert_eq!(scroll_target("", None), ScrollTarget::TopLeft);
        assert_eq!(scroll_target("#", None), ScrollTarget::TopLeft);
    }
}
