use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};
use dropdown::{Key, KeyPress, ModifierKey, Modifiers};

#[test]
fn test_key_codes_convert() {
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Char('x'));
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::BackTab), Key::BackTab);
    assert_eq!(Key::from(KeyCode::PageDown), Key::PageDown);
    assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
}

#[test]
fn test_modifier_key_codes_convert() {
    assert_eq!(
        Key::from(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
        Key::Modifier(ModifierKey::Shift)
    );
    assert_eq!(
        Key::from(KeyCode::Modifier(ModifierKeyCode::RightControl)),
        Key::Modifier(ModifierKey::Control)
    );
    assert_eq!(
        Key::from(KeyCode::Modifier(ModifierKeyCode::LeftAlt)),
        Key::Modifier(ModifierKey::Alt)
    );
    assert_eq!(
        Key::from(KeyCode::Modifier(ModifierKeyCode::LeftSuper)),
        Key::Other
    );
}

#[test]
fn test_modifiers_convert() {
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl);
    assert!(mods.shift);
    assert!(!mods.alt);
    assert!(Modifiers::from(KeyModifiers::NONE).none());
}

#[test]
fn test_key_event_converts() {
    let press = KeyPress::from(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
    assert_eq!(press.key, Key::Tab);
    assert_eq!(press.modifiers, Modifiers::shift());
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_modifier_only_press() {
    let press = KeyPress::from(KeyEvent::new(
        KeyCode::Modifier(ModifierKeyCode::LeftShift),
        KeyModifiers::SHIFT,
    ));
    assert!(press.is_modifier_only());
    assert!(!press.is_shortcut());
    assert!(!KeyPress::new(Key::Char('a')).is_modifier_only());
}

#[test]
fn test_shortcuts() {
    assert!(KeyPress::with_modifiers(Key::Char('c'), Modifiers::ctrl()).is_shortcut());
    assert!(KeyPress::with_modifiers(Key::Char('x'), Modifiers::alt()).is_shortcut());
    assert!(!KeyPress::with_modifiers(Key::Char('A'), Modifiers::shift()).is_shortcut());
    assert!(!KeyPress::from(Key::Down).is_shortcut());
}
