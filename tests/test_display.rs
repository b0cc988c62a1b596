use vimquest::compute::apply_input;
use vimquest::display::render;
use vimquest::entities::*;
use vimquest::input::InputEvent;
use vimquest::levels::LevelCatalog;

fn make_state() -> GameState {
    GameState::new(LevelCatalog::default())
}

fn render_to_string(state: &GameState, width: u16, height: u16) -> String {
    let mut out = Vec::new();
    render(&mut out, state, width, height).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn render_shows_level_and_mode() {
    let s = make_state();
    let frame = render_to_string(&s, 80, 24);
    assert!(frame.contains("Level: The Basics"));
    assert!(frame.contains("-- NORMAL --"));
    assert!(frame.contains("Learn to move with hjkl and shoot with i"));
}

#[test]
fn render_shows_typed_buffer_and_projectiles() {
    let mut s = make_state();
    apply_input(&mut s, InputEvent::Key(GameKey::EnterText));
    apply_input(&mut s, InputEvent::Text('Z'));
    let frame = render_to_string(&s, 80, 24);
    assert!(frame.contains("-- INSERT -- Z"));

    apply_input(&mut s, InputEvent::Key(GameKey::Confirm));
    assert_eq!(s.projectiles.len(), 1);
    assert!(render_to_string(&s, 80, 24).contains('Z'));
}

#[test]
fn render_mode_label_at_u16_limit() {
    // "-- INSERT -- " plus the buffer is exactly u16::MAX characters.
    let mut s = make_state();
    apply_input(&mut s, InputEvent::Key(GameKey::EnterText));
    for _ in 0..(u16::MAX as usize - 13) {
        apply_input(&mut s, InputEvent::Text('a'));
    }
    assert_eq!(s.player.mode_text().chars().count(), u16::MAX as usize);
    render_to_string(&s, 80, 24);
}

#[test]
fn render_mode_label_longer_than_u16() {
    let mut s = make_state();
    apply_input(&mut s, InputEvent::Key(GameKey::EnterText));
    s.player.buffer = vec!['b'; 70_000];
    render_to_string(&s, 80, 24);
}

#[test]
fn render_survives_tiny_terminal() {
    let s = make_state();
    render_to_string(&s, 1, 1);
    render_to_string(&s, 0, 0);
}
