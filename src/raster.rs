// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================
//
// Anti-aliased software rasterization into an RGBA8 frame.

use crate::config::Color;
use crate::geometry::Point;

pub struct Canvas<'a> {
    pub(crate) frame: &'a mut [u8],
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl<'a> Canvas<'a> {
    /// Returns `None` unless `frame` holds exactly `width * height` RGBA
    /// pixels.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        let expected = width.checked_mul(height)?.checked_mul(4)?;
        if frame.len() != expected {
            return None;
        }
        Some(Self {
            frame,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(self.frame[idx], self.frame[idx + 1], self.frame[idx + 2]))
    }

    /// Source-over blend of `color` at `alpha` onto one pixel. Off-canvas
    /// coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, s) in src.iter().enumerate() {
            let d = self.frame[idx + channel] as f32;
            self.frame[idx + channel] = (s * a + d * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }

    /// Line segment of the given thickness with round caps.
    pub fn thick_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        let reach = (thickness / 2.0).ceil() + 1.0;
        let min_x = (from.x.min(to.x) - reach).floor() as i32;
        let max_x = (from.x.max(to.x) + reach).ceil() as i32;
        let min_y = (from.y.min(to.y) - reach).floor() as i32;
        let max_y = (from.y.max(to.y) + reach).ceil() as i32;
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 - from.x;
                let py = y as f32 - from.y;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = from.x + t * dx;
                let ly = from.y + t * dy;
                let dist = (lx - x as f32).hypot(ly - y as f32);
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend(x, y, color, aa);
                }
            }
        }
    }

    /// Filled disc, fully opaque inside `radius` and fading over one pixel
    /// outside it.
    pub fn disc(&mut self, center: Point, radius: f32, color: Color) {
        let min_x = (center.x - radius - 1.0).floor() as i32;
        let max_x = (center.x + radius + 1.0).ceil() as i32;
        let min_y = (center.y - radius - 1.0).floor() as i32;
        let max_y = (center.y + radius + 1.0).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = (x as f32 - center.x).hypot(y as f32 - center.y);
                let aa = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend(x, y, color, aa);
                }
            }
        }
    }

    /// Circle outline of the given thickness centered on `radius`.
    pub fn ring(&mut self, center: Point, radius: f32, thickness: f32, color: Color) {
        let reach = radius + thickness / 2.0 + 1.0;
        let min_x = (center.x - reach).floor() as i32;
        let max_x = (center.x + reach).ceil() as i32;
        let min_y = (center.y - reach).floor() as i32;
        let max_y = (center.y + reach).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = (x as f32 - center.x).hypot(y as f32 - center.y);
                let off = (dist - radius).abs() - thickness / 2.0;
                let aa = (1.0 - off.clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend(x, y, color, aa);
                }
            }
        }
    }
}
