//! Named spacing constants shared by the demo screens and view presets.

/// Default estimate for self-sizing elements.
pub const ESTIMATED_SIZE: f64 = 44.0;

pub const VERY_LARGE_INSET: f64 = 48.0;
pub const LARGE_INSET: f64 = 32.0;
pub const BIG_INSET: f64 = 24.0;
pub const MEDIUM_INSET: f64 = 20.0;
pub const DEFAULT_INSET: f64 = 16.0;
pub const SHORT_INSET: f64 = 12.0;
pub const SMALL_INSET: f64 = 8.0;
pub const LITTLE_INSET: f64 = 4.0;
pub const TINY_INSET: f64 = 2.0;

pub const DEFAULT_CORNER_RADIUS: f64 = 8.0;

pub const SMALL_FONT_SIZE: f64 = 13.0;
pub const DEFAULT_FONT_SIZE: f64 = 15.0;
pub const LARGE_FONT_SIZE: f64 = 17.0;
pub const VERY_LARGE_FONT_SIZE: f64 = 24.0;
