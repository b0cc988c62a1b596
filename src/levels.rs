/// Static level data and the catalog that tracks the active level.

use log::info;

use crate::entities::{Rect, SpawnPoint};
use crate::error::GameError;

/// One level: a named layout of obstacles plus enemy spawn points.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: String,
    pub description: String,
    pub obstacles: Vec<Rect>,
    pub enemies: Vec<SpawnPoint>,
}

impl Level {
    pub fn new(name: &str, description: &str, obstacles: &[(i32, i32, i32, i32)]) -> Self {
        Level {
            name: name.to_string(),
            description: description.to_string(),
            obstacles: obstacles
                .iter()
                .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
                .collect(),
            enemies: Vec::new(),
        }
    }

    pub fn collision_rects(&self) -> &[Rect] {
        &self.obstacles
    }
}

/// Ordered levels plus the index of the one being played.
/// The index is always a valid position in `levels`.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
    current: usize,
}

impl LevelCatalog {
    /// Returns `None` for an empty list, since there would be no current level.
    pub fn new(levels: Vec<Level>) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(LevelCatalog { levels, current: 0 })
    }

    /// The built-in catalog, starting at `index`.
    pub fn with_start(index: usize) -> Result<Self, GameError> {
        let levels = builtin_levels();
        let count = levels.len();
        if index >= count {
            return Err(GameError::UnknownLevel { index, count });
        }
        info!("starting on level {} of {}: {}", index + 1, count, levels[index].name);
        Ok(LevelCatalog { levels, current: index })
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Advances to the next level.  Returns `false` and stays put when the
    /// last level is already active.
    pub fn next_level(&mut self) -> bool {
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            info!("advanced to level {}: {}", self.current + 1, self.current().name);
            true
        } else {
            false
        }
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        LevelCatalog {
            levels: builtin_levels(),
            current: 0,
        }
    }
}

/// The three hand-made levels shipped with the game.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level::new(
            "The Basics",
            "Learn to move with hjkl and shoot with i",
            &[
                (100, 100, 60, 20),
                (200, 250, 20, 100),
                (400, 150, 100, 20),
                (600, 300, 40, 80),
            ],
        ),
        Level::new(
            "The Maze",
            "Navigate through the winding corridors",
            &[
                (50, 50, 20, 500),  // left wall
                (750, 50, 50, 500), // right wall
                (50, 50, 700, 20),  // top wall
                (50, 550, 700, 50), // bottom wall
                (150, 150, 200, 20),
                (200, 200, 20, 150),
                (350, 100, 250, 20),
                (400, 200, 20, 200),
                (500, 300, 150, 20),
            ],
        ),
        Level::new(
            "Obstacle Course",
            "Get through the dense obstacles to reach the end",
            &[
                (100, 100, 100, 30),
                (250, 200, 100, 30),
                (400, 100, 100, 30),
                (550, 200, 100, 30),
                (150, 350, 80, 30),
                (350, 300, 80, 30),
                (550, 350, 80, 30),
            ],
        ),
    ]
}
