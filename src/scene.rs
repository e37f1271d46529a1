// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

use crate::config::{
    Color, BODY_COLOR, BODY_RADIUS, FACE_COLOR, FACE_RADIUS, HAND_COLOR, HOUR_HAND_LENGTH,
    HOUR_HAND_STROKE_WIDTH, MINUTE_HAND_LENGTH, MINUTE_HAND_STROKE_WIDTH, SCALE_COLOR,
    SCALE_STROKE_WIDTH, SECOND_HAND_LENGTH, SECOND_HAND_STROKE_WIDTH,
};
use crate::geometry::{hand_endpoint, tick_marks, HandAngles, Point, Size, Viewport};
use crate::raster::Canvas;
use crate::time::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// Paint parameters carried by each primitive. `stroke_width` is in
/// normalized units and ignored for fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub stroke_width: f32,
    pub mode: PaintMode,
}

impl Style {
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            stroke_width: 0.0,
            mode: PaintMode::Fill,
        }
    }

    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            mode: PaintMode::Stroke,
        }
    }
}

/// A single draw instruction in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Disc {
        center: Point,
        radius: f32,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
}

/// Ordered primitives plus the mapping onto the surface they were laid out for.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    viewport: Viewport,
    primitives: Vec<Primitive>,
}

impl Scene {
    fn new(surface: Size) -> Self {
        Self {
            viewport: Viewport::fit(surface),
            primitives: Vec::new(),
        }
    }

    fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Style)> + '_ {
        self.primitives.iter().filter_map(|p| match *p {
            Primitive::Line { from, to, style } => Some((from, to, style)),
            Primitive::Disc { .. } => None,
        })
    }

    /// Paints the scene over `background`. Strokes thinner than one device
    /// unit are widened to one.
    pub fn rasterize(&self, canvas: &mut Canvas, background: Color) {
        canvas.clear(background);
        let vp = &self.viewport;
        for primitive in &self.primitives {
            match *primitive {
                Primitive::Disc {
                    center,
                    radius,
                    style,
                } => {
                    let center = vp.to_device(center);
                    let radius = vp.scale_length(radius);
                    match style.mode {
                        PaintMode::Fill => canvas.disc(center, radius, style.color),
                        PaintMode::Stroke => {
                            let width = vp.scale_length(style.stroke_width).max(1.0);
                            canvas.ring(center, radius, width, style.color)
                        }
                    }
                }
                Primitive::Line { from, to, style } => {
                    let width = vp.scale_length(style.stroke_width).max(1.0);
                    canvas.thick_line(vp.to_device(from), vp.to_device(to), width, style.color);
                }
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Lays out the watch for `time` on a surface of `surface` size.
///
/// Order: body disc, face disc, 61 scale lines, then hour, minute and
/// second hands.
pub fn render(time: TimeOfDay, surface: Size) -> Scene {
    let mut scene = Scene::new(surface);
    add_background(&mut scene);
    add_scale_lines(&mut scene);
    add_hands(&mut scene, time);
    scene
}

fn add_background(scene: &mut Scene) {
    scene.add(Primitive::Disc {
        center: Point::ORIGIN,
        radius: BODY_RADIUS,
        style: Style::fill(BODY_COLOR),
    });
    scene.add(Primitive::Disc {
        center: Point::ORIGIN,
        radius: FACE_RADIUS,
        style: Style::fill(FACE_COLOR),
    });
}

fn add_scale_lines(scene: &mut Scene) {
    let style = Style::stroke(SCALE_COLOR, SCALE_STROKE_WIDTH);
    for tick in tick_marks() {
        scene.add(Primitive::Line {
            from: tick.outer,
            to: tick.inner,
            style,
        });
    }
}

fn add_hands(scene: &mut Scene, time: TimeOfDay) {
    let angles = HandAngles::at(time);
    let hands = [
        (angles.hour, HOUR_HAND_LENGTH, HOUR_HAND_STROKE_WIDTH),
        (angles.minute, MINUTE_HAND_LENGTH, MINUTE_HAND_STROKE_WIDTH),
        (angles.second, SECOND_HAND_LENGTH, SECOND_HAND_STROKE_WIDTH),
    ];
    for (angle, length, width) in hands {
        scene.add(Primitive::Line {
            from: Point::ORIGIN,
            to: hand_endpoint(angle, length),
            style: Style::stroke(HAND_COLOR, width),
        });
    }
}
