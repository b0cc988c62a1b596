use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use vimquest::entities::{GameKey, Mode};
use vimquest::input::{translate, InputEvent};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn hjkl_and_arrows_move_in_movement_mode() {
    let cases = [
        (KeyCode::Char('h'), GameKey::Left),
        (KeyCode::Left, GameKey::Left),
        (KeyCode::Char('j'), GameKey::Down),
        (KeyCode::Down, GameKey::Down),
        (KeyCode::Char('k'), GameKey::Up),
        (KeyCode::Up, GameKey::Up),
        (KeyCode::Char('l'), GameKey::Right),
        (KeyCode::Right, GameKey::Right),
    ];
    for (code, key) in cases {
        assert_eq!(translate(&press(code), Mode::Movement), Some(InputEvent::Key(key)));
    }
}

#[test]
fn i_enters_text_mode_and_q_quits() {
    assert_eq!(
        translate(&press(KeyCode::Char('i')), Mode::Movement),
        Some(InputEvent::Key(GameKey::EnterText))
    );
    assert_eq!(translate(&press(KeyCode::Char('q')), Mode::Movement), Some(InputEvent::Quit));
}

#[test]
fn other_chars_ignored_in_movement_mode() {
    assert_eq!(translate(&press(KeyCode::Char('x')), Mode::Movement), None);
    assert_eq!(translate(&press(KeyCode::Enter), Mode::Movement), None);
    assert_eq!(translate(&press(KeyCode::Esc), Mode::Movement), None);
}

#[test]
fn text_mode_control_keys() {
    assert_eq!(
        translate(&press(KeyCode::Esc), Mode::TextEntry),
        Some(InputEvent::Key(GameKey::Cancel))
    );
    assert_eq!(
        translate(&press(KeyCode::Backspace), Mode::TextEntry),
        Some(InputEvent::Key(GameKey::DeleteLast))
    );
    assert_eq!(
        translate(&press(KeyCode::Enter), Mode::TextEntry),
        Some(InputEvent::Key(GameKey::Confirm))
    );
}

#[test]
fn printable_chars_go_to_text_channel_only() {
    for c in ['h', 'i', 'q', 'A', '!', ' ', 'é', 'ж'] {
        assert_eq!(translate(&press(KeyCode::Char(c)), Mode::TextEntry), Some(InputEvent::Text(c)));
    }
}

#[test]
fn shifted_char_is_taken_verbatim() {
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT));
    assert_eq!(translate(&ev, Mode::TextEntry), Some(InputEvent::Text('Q')));
}

#[test]
fn control_chars_are_dropped() {
    assert_eq!(translate(&press(KeyCode::Char('\u{7}')), Mode::TextEntry), None);
    assert_eq!(translate(&press(KeyCode::Tab), Mode::TextEntry), None);
}

#[test]
fn ctrl_c_quits_in_both_modes() {
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&ev, Mode::Movement), Some(InputEvent::Quit));
    assert_eq!(translate(&ev, Mode::TextEntry), Some(InputEvent::Quit));
}

#[test]
fn release_events_are_ignored() {
    let ev = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('h'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(translate(&ev, Mode::Movement), None);
}

#[test]
fn repeat_counts_as_press() {
    let ev = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('l'),
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ));
    assert_eq!(translate(&ev, Mode::Movement), Some(InputEvent::Key(GameKey::Right)));
}

#[test]
fn non_key_events_are_ignored() {
    assert_eq!(translate(&Event::Resize(80, 24), Mode::Movement), None);
    assert_eq!(translate(&Event::FocusGained, Mode::TextEntry), None);
}
