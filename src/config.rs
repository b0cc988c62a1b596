/// Playfield dimensions, tuning values and command-line options.

use clap::Parser;

use crate::error::GameError;

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Logical playfield width in world units.
pub const SCREEN_WIDTH: i32 = 800;
/// Logical playfield height in world units.
pub const SCREEN_HEIGHT: i32 = 600;

// ── Player ────────────────────────────────────────────────────────────────────

/// Side length of the player's square bounding box.
pub const PLAYER_SIZE: i32 = 16;
/// Displacement applied per movement key press.
pub const PLAYER_SPEED: i32 = 8;
pub const PLAYER_SPAWN_X: i32 = 400;
pub const PLAYER_SPAWN_Y: i32 = 300;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 8.0;
/// Vertical distance between consecutive projectiles of one volley.
pub const PROJECTILE_SPACING: f32 = 8.0;

// ── Loop ──────────────────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 60;

pub const WINDOW_TITLE: &str = "VimQuest - A Vim Adventure";

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "vimquest", version, about = "A vim-flavoured terminal arcade game")]
pub struct Args {
    /// Zero-based index of the level to start on.
    #[arg(long, default_value_t = 0)]
    pub level: usize,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,
}

impl Args {
    /// Rejects option values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.fps == 0 {
            return Err(GameError::InvalidFps(self.fps));
        }
        Ok(())
    }

    /// Duration of one tick at the configured rate.
    pub fn frame(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.fps.max(1)
    }
}
