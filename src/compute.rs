/// Game-logic operations: projectile lifecycle, collision resolution and the
/// per-frame tick.
///
/// These update the state in place rather than returning a new copy: the
/// player and projectile contracts (`handle_key`, `resolve_collisions`,
/// `advance`) are defined as mutations, and the loop owns a single
/// `GameState` for the whole run.

use log::{debug, trace};

use crate::config::{
    PLAYER_SIZE, PROJECTILE_SPACING, PROJECTILE_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::{GameKey, GameState, Mode, Player, Projectile, Rect};
use crate::input::InputEvent;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Build one projectile per buffered character, fired rightward from the
/// player's right edge.  The i-th of N characters sits at
/// `(i - N/2) * PROJECTILE_SPACING` below the player's top, so the volley is
/// centred on the player.
pub fn spawn_projectiles(origin: &Player, buffer: &[char]) -> Vec<Projectile> {
    let half = buffer.len() as f32 / 2.0;
    let x = (origin.x + origin.size()) as f32;
    buffer
        .iter()
        .enumerate()
        .map(|(i, &glyph)| Projectile {
            x,
            y: origin.y as f32 + (i as f32 - half) * PROJECTILE_SPACING,
            glyph,
            direction: (1.0, 0.0),
            speed: PROJECTILE_SPEED,
        })
        .collect()
}

/// Move a projectile one step.  Returns `false` once it has left the playfield.
pub fn advance(projectile: &mut Projectile) -> bool {
    projectile.x += projectile.direction.0 * projectile.speed;
    projectile.y += projectile.direction.1 * projectile.speed;
    in_playfield(projectile)
}

/// Advance every live projectile and drop the ones that expired.
pub fn advance_all(projectiles: &mut Vec<Projectile>) {
    projectiles.retain_mut(advance);
}

fn in_playfield(p: &Projectile) -> bool {
    p.x >= 0.0 && p.x <= SCREEN_WIDTH as f32 && p.y >= 0.0 && p.y <= SCREEN_HEIGHT as f32
}

// ── Collision ─────────────────────────────────────────────────────────────────

/// Push the player out of every obstacle it overlaps.
///
/// Obstacles are handled in declaration order and each correction starts from
/// the position left by the previous one, so overlapping several obstacles in
/// one frame can produce a cumulative, order-dependent push.  Both axes are
/// corrected independently.  Returns the number of obstacles that were hit.
pub fn resolve_collisions(player: &mut Player, obstacles: &[Rect]) -> usize {
    let size = player.size();
    let mut hits = 0;

    for obs in obstacles {
        if !player.bounds().intersects(obs) {
            continue;
        }
        hits += 1;

        if player.x < obs.x {
            player.x = obs.x - size;
        } else if player.x + size > obs.right() {
            player.x = obs.right();
        }

        if player.y < obs.y {
            player.y = obs.y - size;
        } else if player.y + size > obs.bottom() {
            player.y = obs.bottom();
        }

        trace!("collision with {:?}, player now at ({}, {})", obs, player.x, player.y);
    }

    // A push near the border must not leave the playfield.
    player.x = player.x.clamp(0, SCREEN_WIDTH - PLAYER_SIZE);
    player.y = player.y.clamp(0, SCREEN_HEIGHT - PLAYER_SIZE);

    hits
}

// ── Input dispatch ────────────────────────────────────────────────────────────

/// Route one translated input event into the state.  Returns `false` when the
/// event asks the game to quit.
pub fn apply_input(state: &mut GameState, event: InputEvent) -> bool {
    match event {
        InputEvent::Quit => return false,
        InputEvent::Text(c) => state.player.append_text(c),
        InputEvent::Key(key) => {
            state.player.handle_key(key);
            if key == GameKey::Confirm && state.player.mode == Mode::TextEntry {
                fire(state);
            }
        }
    }
    true
}

/// Turn the buffer into a volley and clear it.  An empty buffer fires nothing.
fn fire(state: &mut GameState) {
    if state.player.buffer.is_empty() {
        return;
    }
    let volley = spawn_projectiles(&state.player, &state.player.buffer);
    debug!("fired {:?} as {} projectiles", state.player.buffer_text(), volley.len());
    state.projectiles.extend(volley);
    state.player.buffer.clear();
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one frame: projectiles first, then collision
/// resolution against the active level.  Input must already be applied.
pub fn tick(state: &mut GameState) {
    state.frame += 1;
    advance_all(&mut state.projectiles);
    resolve_collisions(&mut state.player, state.levels.current().collision_rects());
}

/// Put the player back at the spawn point in Movement mode and clear the
/// live projectiles.  The active level does not change.
pub fn reset_level(state: &mut GameState) {
    state.player = Player::default();
    state.projectiles.clear();
    debug!("reset level {}", state.levels.current().name);
}
