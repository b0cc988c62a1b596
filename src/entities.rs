/// All game entity types — pure data, no logic beyond geometry helpers.

use crate::config::{PLAYER_SIZE, PLAYER_SPAWN_X, PLAYER_SPAWN_Y};
use crate::levels::LevelCatalog;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world units; (x, y) is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when both rectangles overlap on both axes.  Rectangles that only
    /// share an edge do not intersect, and empty rectangles never do.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Where an enemy would appear.  Levels declare these but nothing spawns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPoint {
    pub x: i32,
    pub y: i32,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Key presses move the player (vim normal mode).
    #[default]
    Movement,
    /// Typed characters collect in the buffer (vim insert mode).
    TextEntry,
}

/// Abstract game keys, independent of the physical keyboard layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Down,
    Up,
    Right,
    EnterText,
    Cancel,
    DeleteLast,
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub mode: Mode,
    /// Characters typed in TextEntry mode, waiting to be fired.
    pub buffer: Vec<char>,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Player {
            x,
            y,
            mode: Mode::Movement,
            buffer: Vec::new(),
        }
    }

    pub fn size(&self) -> i32 {
        PLAYER_SIZE
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn buffer_text(&self) -> String {
        self.buffer.iter().collect()
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A typed character flying across the playfield.
/// Positions are floats because volley offsets can land on half units.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
    /// Unit direction of travel; volleys always fly right, (1, 0).
    pub direction: (f32, f32),
    pub speed: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the loop owns: the player, the live projectiles and the levels.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub levels: LevelCatalog,
    pub frame: u64,
}

impl GameState {
    pub fn new(levels: LevelCatalog) -> Self {
        GameState {
            player: Player::default(),
            projectiles: Vec::new(),
            levels,
            frame: 0,
        }
    }
}
