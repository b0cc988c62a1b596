use thiserror::Error;

/// Failures that can occur while setting the game up.
///
/// Gameplay itself never fails: unknown keys are ignored, movement is
/// clamped and deleting from an empty buffer is a no-op.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("level index {index} is out of range (catalog has {count} levels)")]
    UnknownLevel { index: usize, count: usize },

    #[error("tick rate must be at least 1, got {0}")]
    InvalidFps(u32),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
