/// The player's two-mode input state machine.  Both entry points mutate the
/// player in place and return nothing.
///
/// Movement mode moves the square one axis at a time; TextEntry mode edits
/// the pending buffer.  Firing the buffer is left to `compute::apply_input`,
/// which owns the live projectile list.

use log::debug;

use crate::config::{PLAYER_SIZE, PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{GameKey, Mode, Player};

impl Player {
    /// Apply one key press.  Keys with no meaning in the current mode are ignored.
    pub fn handle_key(&mut self, key: GameKey) {
        match self.mode {
            Mode::Movement => self.handle_movement_key(key),
            Mode::TextEntry => self.handle_text_entry_key(key),
        }
    }

    /// Append a character from the text channel.  Only TextEntry accepts text.
    pub fn append_text(&mut self, c: char) {
        if self.mode == Mode::TextEntry {
            self.buffer.push(c);
        }
    }

    /// Label shown in the HUD for the current mode.
    pub fn mode_text(&self) -> String {
        match self.mode {
            Mode::Movement => "-- NORMAL --".to_string(),
            Mode::TextEntry => format!("-- INSERT -- {}", self.buffer_text()),
        }
    }

    fn handle_movement_key(&mut self, key: GameKey) {
        match key {
            GameKey::EnterText => {
                self.mode = Mode::TextEntry;
                self.buffer.clear();
                debug!("entered text mode");
            }
            GameKey::Left => self.x = (self.x - PLAYER_SPEED).max(0),
            GameKey::Right => self.x = (self.x + PLAYER_SPEED).min(SCREEN_WIDTH - PLAYER_SIZE),
            GameKey::Up => self.y = (self.y - PLAYER_SPEED).max(0),
            GameKey::Down => self.y = (self.y + PLAYER_SPEED).min(SCREEN_HEIGHT - PLAYER_SIZE),
            GameKey::Cancel | GameKey::DeleteLast | GameKey::Confirm => {}
        }
    }

    fn handle_text_entry_key(&mut self, key: GameKey) {
        match key {
            GameKey::Cancel => {
                self.mode = Mode::Movement;
                self.buffer.clear();
                debug!("returned to movement mode");
            }
            GameKey::DeleteLast => {
                self.buffer.pop();
            }
            // Firing happens in the orchestrator; the mode stays TextEntry.
            GameKey::Confirm => {}
            GameKey::Left
            | GameKey::Down
            | GameKey::Up
            | GameKey::Right
            | GameKey::EnterText => {}
        }
    }
}
