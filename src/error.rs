use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface failure: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("window has an empty {0}x{1} surface")]
    EmptySurface(u32, u32),

    #[error("failed to spawn ticker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("expected HH:MM or HH:MM:SS, got {0:?}")]
    Shape(String),

    #[error("invalid time field {0:?}")]
    Field(String),

    #[error("time {0:?} is outside 00:00:00..=23:59:59")]
    OutOfRange(String),
}
