// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod logging;
pub mod measure;
pub mod raster;
pub mod scene;
pub mod scheduler;
pub mod time;

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::sync::Arc;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::window::WindowBuilder;

pub use config::{Color, WatchConfig};
pub use error::{ParseTimeError, WatchError};
pub use face::WatchFace;
pub use geometry::{HandAngles, Point, Size};
pub use measure::MeasureSpec;
pub use raster::Canvas;
pub use scene::{render, PaintMode, Primitive, Scene, Style};
pub use scheduler::{RedrawSignal, Ticker};
pub use time::{LocalClock, SharedTime, TimeOfDay, TimeSource};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Events the ticker posts into the window's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    Tick,
}

impl RedrawSignal for EventLoopProxy<WatchEvent> {
    fn request_redraw(&self) -> bool {
        self.send_event(WatchEvent::Tick).is_ok()
    }
}

/// A watch face hosted in its own window.
#[derive(Debug, Clone)]
pub struct Watch {
    config: WatchConfig,
}

impl Watch {
    pub fn new(config: WatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Size the window is opened at.
    pub fn window_size(&self, face: &WatchFace) -> Size {
        let offered = self
            .config
            .preferred_size
            .map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);
        face.measure(offered, offered)
    }

    /// Opens the window and blocks until it is closed.
    pub fn show(&self) -> Result<(), WatchError> {
        let event_loop = EventLoopBuilder::<WatchEvent>::with_user_event().build()?;
        let mut face = WatchFace::new(&self.config, event_loop.create_proxy())?;
        let size = self.window_size(&face);

        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();
        let inner = window.inner_size();
        if inner.width == 0 || inner.height == 0 {
            return Err(WatchError::EmptySurface(inner.width, inner.height));
        }
        let mut surface = Size::new(inner.width, inner.height);
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, &window);
        let mut pixels = Pixels::new(inner.width, inner.height, surface_texture)?;
        let background = self.config.background;

        log::info!(
            "opened {:?} at {}x{} ({})",
            self.config.title,
            surface.width,
            surface.height,
            if face.is_ticking() { "live" } else { "static" }
        );

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Wait);
            match event {
                Event::Resumed | Event::UserEvent(WatchEvent::Tick) => {
                    window_clone.request_redraw();
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        face.teardown();
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if new_size.width == 0 || new_size.height == 0 {
                            return;
                        }
                        if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("failed to resize surface: {e}");
                        }
                        // The frame keeps its old length when this fails.
                        match pixels.resize_buffer(new_size.width, new_size.height) {
                            Ok(()) => surface = Size::new(new_size.width, new_size.height),
                            Err(e) => log::warn!("failed to resize frame buffer: {e}"),
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let frame = pixels.frame_mut();
                        let Some(mut canvas) =
                            Canvas::new(frame, surface.width as usize, surface.height as usize)
                        else {
                            log::warn!(
                                "frame buffer does not match {}x{}, skipping redraw",
                                surface.width,
                                surface.height
                            );
                            return;
                        };
                        face.draw(surface).rasterize(&mut canvas, background);
                        if let Err(e) = pixels.render() {
                            log::error!("render failed: {e}");
                            face.teardown();
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::LoopExiting => {
                    face.teardown();
                    log::info!("watch closed");
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
