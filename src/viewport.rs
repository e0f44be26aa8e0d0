//! Scroll and layout decisions for the page chrome, kept free of DOM types.

use crate::config::{
    HEADER_FALLBACK_HEIGHT, HEADER_SCROLL_THRESHOLD, MOBILE_BREAKPOINT, NAV_SECTION_OFFSET,
    REVEAL_OFFSET, SCROLL_TARGET_GAP,
};

pub fn header_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > HEADER_SCROLL_THRESHOLD
}

/// Window offset that puts a section just below the fixed header.
pub fn scroll_target_top(section_top: f64, header_height: Option<f64>) -> f64 {
    let header = header_height.unwrap_or(HEADER_FALLBACK_HEIGHT);
    (section_top - header - SCROLL_TARGET_GAP).max(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the probe line. Later sections win when bounds overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + NAV_SECTION_OFFSET;
    sections
        .iter()
        .filter(|section| section.contains(probe))
        .last()
        .map(|section| section.id.as_str())
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET
}

/// The mobile menu only exists below the breakpoint.
pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT
}

/// `#services` -> `services`; anything that isn't an in-page anchor is `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
