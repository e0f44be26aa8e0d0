use log::Level;

/// Header gets the `scrolled` class once the page is scrolled past this.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Used for the scroll target when the header hasn't been measured.
pub const HEADER_FALLBACK_HEIGHT: f64 = 80.0;
pub const SCROLL_TARGET_GAP: f64 = 20.0;
pub const NAV_SECTION_OFFSET: f64 = 200.0;
pub const REVEAL_OFFSET: f64 = 150.0;
pub const MOBILE_BREAKPOINT: f64 = 767.0;
pub const INITIAL_CHECK_DELAY_MS: u32 = 100;

pub const REVEAL_SELECTOR: &str = ".service-card, .contact-item, .feature-item";

/// Delays driving the contact form. All values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTimings {
    pub send_delay_ms: u32,
    pub error_expiry_ms: u32,
    pub success_expiry_ms: u32,
}

impl Default for SubmissionTimings {
    fn default() -> Self {
        Self {
            send_delay_ms: 1500,
            error_expiry_ms: 5000,
            success_expiry_ms: 8000,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty when running `trunk serve` locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
