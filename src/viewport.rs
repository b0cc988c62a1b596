/// Projection of the logical 800×600 playfield onto a terminal grid.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect;

/// Rows reserved above the play area (HUD line and level description).
pub const TOP_ROWS: u16 = 2;
/// Rows reserved below the play area (instruction line).
pub const BOTTOM_ROWS: u16 = 1;

/// Column at which `text` must start to end one cell before the right edge
/// of a `width`-column terminal.  Text wider than the terminal starts at 0.
pub fn right_aligned_col(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len.saturating_add(1))
}

/// The interior of the bordered play area, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Leftmost interior column.
    pub left: u16,
    /// Topmost interior row.
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    /// Fit the play area into a terminal of `width` × `height` cells, leaving
    /// room for the HUD rows and a one-cell border.
    pub fn fit(width: u16, height: u16) -> Self {
        Viewport {
            left: 1,
            top: TOP_ROWS + 1,
            cols: width.saturating_sub(2).max(1),
            rows: height.saturating_sub(TOP_ROWS + BOTTOM_ROWS + 2).max(1),
        }
    }

    /// Cell containing a world point.  Points on or past the far edge map to
    /// the last column/row.
    pub fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = Self::scale(x, SCREEN_WIDTH, self.cols);
        let row = Self::scale(y, SCREEN_HEIGHT, self.rows);
        (self.left + col, self.top + row)
    }

    /// Cells covered by a world rectangle, as an inclusive column span and an
    /// inclusive row span.  Every rectangle covers at least one cell.
    pub fn cover(&self, rect: &Rect) -> ((u16, u16), (u16, u16)) {
        let (c0, r0) = self.cell(rect.x as f32, rect.y as f32);
        // Far edges are exclusive in world space.
        let (c1, r1) = self.cell(
            (rect.right() as f32 - 0.5).max(rect.x as f32),
            (rect.bottom() as f32 - 0.5).max(rect.y as f32),
        );
        ((c0, c1.max(c0)), (r0, r1.max(r0)))
    }

    fn scale(v: f32, extent: i32, cells: u16) -> u16 {
        // Float-to-int casts saturate, so far-off points land on the last cell.
        let scaled = (v * cells as f32 / extent as f32).max(0.0);
        (scaled as u16).min(cells.saturating_sub(1))
    }
}
