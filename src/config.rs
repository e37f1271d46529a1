use std::time::Duration;

use bon::Builder;

use crate::time::TimeOfDay;

/// Color representation for watch elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

// ============================================================================
// STYLE CONSTANTS
// ============================================================================
//
// All lengths and widths are in normalized units: 1.0 is the outer radius.

pub const SECOND_HAND_STROKE_WIDTH: f32 = 0.01;
pub const HOUR_HAND_STROKE_WIDTH: f32 = 0.05;
pub const MINUTE_HAND_STROKE_WIDTH: f32 = 0.03;

/// Inner radius of a regular scale line.
pub const NORMAL_SCALE_SIZE: f32 = 0.95;
/// Inner radius of an hour scale line (every fifth).
pub const LARGE_SCALE_SIZE: f32 = 0.95 * 0.95;
/// Scale lines are stroked with the second hand's width.
pub const SCALE_STROKE_WIDTH: f32 = SECOND_HAND_STROKE_WIDTH;

pub const BODY_RADIUS: f32 = 1.0;
pub const FACE_RADIUS: f32 = 0.85;

pub const HOUR_HAND_LENGTH: f32 = 0.6;
pub const MINUTE_HAND_LENGTH: f32 = 0.75;
pub const SECOND_HAND_LENGTH: f32 = 0.9;

pub const BODY_COLOR: Color = Color::new(0x00, 0x00, 0x00);
pub const FACE_COLOR: Color = Color::new(0x44, 0x44, 0x44);
pub const SCALE_COLOR: Color = Color::new(0x88, 0x88, 0x88);
pub const HAND_COLOR: Color = Color::new(0xff, 0xff, 0xff);

/// Size used on an axis the container leaves unconstrained.
pub const DEFAULT_FALLBACK_SIZE: u32 = 500;
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1000);

// ============================================================================
// WATCH CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Builder)]
pub struct WatchConfig {
    #[builder(default = "Watch".to_string())]
    pub title: String,

    /// Edge length offered to the face on both axes. `None` leaves the
    /// measurement unconstrained.
    pub preferred_size: Option<u32>,
    #[builder(default = DEFAULT_FALLBACK_SIZE)]
    pub fallback_size: u32,

    #[builder(default = DEFAULT_TICK_PERIOD)]
    pub tick_period: Duration,
    /// Renders a static face at this time instead of following the clock.
    pub frozen_at: Option<TimeOfDay>,

    #[builder(default = Color::new(0xff, 0xff, 0xff))]
    pub background: Color,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
