//! Watch face geometry on the normalized unit circle.
//!
//! The normalized space spans `[-1, 1]` on both axes with the origin at the
//! face center and `y` pointing *up*. Device space has `y` pointing down, so
//! [`Viewport::to_device`] flips the vertical axis. Under that flip a negative
//! rotation angle turns a hand clockwise on screen, which is why every hand
//! angle below carries a leading minus sign.

use std::f64::consts::PI;

use crate::config::{LARGE_SCALE_SIZE, NORMAL_SCALE_SIZE};
use crate::time::TimeOfDay;

pub const SCALE_LINE_COUNT: usize = 61;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Drawing surface dimensions in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(edge: u32) -> Self {
        Self { width: edge, height: edge }
    }
}

// ============================================================================
// COORDINATE MAPPING
// ============================================================================

/// Maps the normalized square onto the shorter dimension of a surface,
/// centered on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cx: f32,
    pub cy: f32,
    /// Device units per normalized unit.
    pub half_extent: f32,
}

impl Viewport {
    pub fn fit(surface: Size) -> Self {
        let width = surface.width as f32;
        let height = surface.height as f32;
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            half_extent: width.min(height) / 2.0,
        }
    }

    pub fn to_device(&self, p: Point) -> Point {
        Point::new(self.cx + p.x * self.half_extent, self.cy - p.y * self.half_extent)
    }

    pub fn scale_length(&self, normalized: f32) -> f32 {
        normalized * self.half_extent
    }
}

// ============================================================================
// HANDS
// ============================================================================

/// Hand rotations in degrees. Zero points at twelve; negative is clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(time: TimeOfDay) -> Self {
        let t = time.seconds() as f64;
        Self {
            hour: -(t / 3600.0) * 30.0,
            minute: -(t / 60.0) * 6.0,
            second: -t * 6.0,
        }
    }

    /// Each angle reduced into `(-360, 0]`.
    pub fn normalized(self) -> Self {
        Self {
            hour: wrap_degrees(self.hour),
            minute: wrap_degrees(self.minute),
            second: wrap_degrees(self.second),
        }
    }
}

fn wrap_degrees(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r > 0.0 {
        r - 360.0
    } else if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Tip of a hand of `length` rotated by `angle_deg` from twelve o'clock.
pub fn hand_endpoint(angle_deg: f64, length: f32) -> Point {
    let theta = angle_deg.to_radians();
    let length = length as f64;
    Point::new((-length * theta.sin()) as f32, (length * theta.cos()) as f32)
}

// ============================================================================
// SCALE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub outer: Point,
    pub inner: Point,
}

impl TickMark {
    pub fn is_hour(&self) -> bool {
        self.index % 5 == 0
    }
}

/// The 61 scale lines, index 0 through 60 inclusive. Index 60 lands on top of
/// index 0.
pub fn tick_marks() -> Vec<TickMark> {
    let step = 2.0 * PI / 60.0;
    (0..SCALE_LINE_COUNT)
        .map(|index| {
            let angle = 2.0 * PI - step * index as f64;
            let x = angle.cos() as f32;
            let y = angle.sin() as f32;
            let inner_radius = if index % 5 == 0 {
                LARGE_SCALE_SIZE
            } else {
                NORMAL_SCALE_SIZE
            };
            TickMark {
                index,
                outer: Point::new(x, y),
                inner: Point::new(x * inner_radius, y * inner_radius),
            }
        })
        .collect()
}
