//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed UI timings.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Terminal Kiosk";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "kiosk";

/// Event-loop poll interval in milliseconds. Animations tick at this rate.
pub const TICK_MS: u64 = 100;

/// Default carousel auto-advance period in milliseconds.
pub const CAROUSEL_INTERVAL_MS: u64 = 5000;

/// Delay between initiating a scroll to the about section and activating a
/// pending tab, so the scroll motion settles first.
pub const SCROLL_SETTLE_MS: u64 = 500;

/// Total duration of the stats counter animation in milliseconds.
pub const STATS_DURATION_MS: u64 = 2000;

/// Number of increments the stats counter animation is divided into.
pub const STATS_STEPS: u32 = 60;

/// Scroll offset (in rows) past which the header switches to its compact form.
pub const HEADER_SCROLL_THRESHOLD: u16 = 5;

/// Scroll offset (in rows) past which the header hides while scrolling down.
pub const HEADER_HIDE_THRESHOLD: u16 = 10;
