/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use crate::entities::{GameState, Mode, Projectile, Rect};
use crate::viewport::{right_aligned_col, Viewport};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_LEVEL: Color = Color::White;
const C_HUD_NORMAL: Color = Color::Green;
const C_HUD_INSERT: Color = Color::Yellow;
const C_DESCRIPTION: Color = Color::DarkGrey;
const C_OBSTACLE: Color = Color::Grey;
const C_PLAYER: Color = Color::Blue;
const C_PROJECTILE: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `width` × `height` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let view = Viewport::fit(width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, width)?;
    draw_border(out, &view)?;

    for obstacle in state.levels.current().collision_rects() {
        draw_obstacle(out, &view, obstacle)?;
    }
    draw_player(out, &view, state)?;
    for projectile in &state.projectiles {
        draw_projectile(out, &view, projectile)?;
    }

    draw_controls_hint(out, state, height)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (rows 0 and 1) ────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    let level = state.levels.current();

    // Level name — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {}", level.name)))?;

    // Mode indicator — right
    let mode_text = state.player.mode_text();
    let mode_color = match state.player.mode {
        Mode::Movement => C_HUD_NORMAL,
        Mode::TextEntry => C_HUD_INSERT,
    };
    let mx = right_aligned_col(width, &mode_text);
    out.queue(cursor::MoveTo(mx, 0))?;
    out.queue(style::SetForegroundColor(mode_color))?;
    out.queue(Print(&mode_text))?;

    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_DESCRIPTION))?;
    out.queue(Print(&level.description))?;

    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let top = view.top - 1;
    let bottom = view.top + view.rows;
    let right = view.left + view.cols;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in view.top..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_obstacle<W: Write>(out: &mut W, view: &Viewport, rect: &Rect) -> std::io::Result<()> {
    let ((c0, c1), (r0, r1)) = view.cover(rect);
    let fill = "█".repeat((c1 - c0 + 1) as usize);

    out.queue(style::SetForegroundColor(C_OBSTACLE))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let ((c0, c1), (r0, r1)) = view.cover(&state.player.bounds());

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print("@".repeat((c1 - c0 + 1) as usize)))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: &Viewport,
    projectile: &Projectile,
) -> std::io::Result<()> {
    let (col, row) = view.cell(projectile.x, projectile.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print(projectile.glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState, height: u16) -> std::io::Result<()> {
    let hint = match state.player.mode {
        Mode::Movement => "hjkl / arrows: move | i: insert mode | q: quit",
        Mode::TextEntry => "type letters, Enter: shoot | Backspace: delete | Esc: normal mode",
    };
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
