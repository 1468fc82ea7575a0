//! Tests for crossterm backend

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use super::translate_key_event;
use crate::key::Key;

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn test_translate_characters() {
    let key = translate_key_event(press(KeyCode::Char('j'), KeyModifiers::empty()));
    assert_eq!(key, Key::Char('j'));

    let key = translate_key_event(press(KeyCode::Char('$'), KeyModifiers::SHIFT));
    assert_eq!(key, Key::Char('$'));

    let key = translate_key_event(press(KeyCode::Char('G'), KeyModifiers::SHIFT));
    assert_eq!(key, Key::Char('G'));
}

#[test]
fn test_translate_ctrl() {
    let key = translate_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(key, Key::Ctrl('c'));

    let key = translate_key_event(press(KeyCode::Char('C'), KeyModifiers::CONTROL));
    assert_eq!(key, Key::Ctrl('c'));
}

#[test]
fn test_translate_editing_keys() {
    assert_eq!(
        translate_key_event(press(KeyCode::Enter, KeyModifiers::empty())),
        Key::Enter
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('\r'), KeyModifiers::empty())),
        Key::Enter
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Esc, KeyModifiers::empty())),
        Key::Escape
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Backspace, KeyModifiers::empty())),
        Key::Backspace
    );
}

#[test]
fn test_translate_unused_keys() {
    for code in [KeyCode::Up, KeyCode::Tab, KeyCode::F(1), KeyCode::Delete] {
        assert_eq!(
            translate_key_event(press(code, KeyModifiers::empty())),
            Key::Unknown
        );
    }
}
