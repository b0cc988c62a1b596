/// Translation of raw terminal events into game input.
///
/// A terminal delivers one event per keystroke, so the two logical channels
/// (game keys and typed text) are split here by mode: in TextEntry every
/// printable character goes to the text channel and only Esc, Backspace and
/// Enter act as keys; in Movement, characters are only ever keys.  A single
/// keystroke therefore reaches exactly one channel.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::{GameKey, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(GameKey),
    Text(char),
    Quit,
}

/// Map a terminal event to a game input, or `None` if it means nothing in `mode`.
pub fn translate(event: &Event, mode: Mode) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key, mode),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, mode: Mode) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::Movement => match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(InputEvent::Key(GameKey::Left)),
            KeyCode::Char('j') | KeyCode::Down => Some(InputEvent::Key(GameKey::Down)),
            KeyCode::Char('k') | KeyCode::Up => Some(InputEvent::Key(GameKey::Up)),
            KeyCode::Char('l') | KeyCode::Right => Some(InputEvent::Key(GameKey::Right)),
            KeyCode::Char('i') => Some(InputEvent::Key(GameKey::EnterText)),
            KeyCode::Char('q') => Some(InputEvent::Quit),
            _ => None,
        },
        Mode::TextEntry => match key.code {
            KeyCode::Esc => Some(InputEvent::Key(GameKey::Cancel)),
            KeyCode::Backspace => Some(InputEvent::Key(GameKey::DeleteLast)),
            KeyCode::Enter => Some(InputEvent::Key(GameKey::Confirm)),
            KeyCode::Char(c) if !c.is_control() => Some(InputEvent::Text(c)),
            _ => None,
        },
    }
}
