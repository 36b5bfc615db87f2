use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Show component state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Share of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.25;

/// Lazy images start loading this far before they scroll into view.
pub const LAZY_IMG_ROOT_MARGIN_PX: f64 = 200.0;

pub const STICKY_THRESHOLD: f64 = 0.0;

/// Opacity of the nav links that are not under the pointer.
pub const FADED_LINK_OPACITY: f64 = 0.5;

pub const SECTION_FEATURES_ID: &str = "section--1";
