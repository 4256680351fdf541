use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanterm::tui::keymap::{command_for_key, help_text};
use kanterm::tui::{Command, InputMode};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_idle_bindings() {
    let cases = [
        (KeyCode::Char('q'), Command::Quit),
        (KeyCode::Char('n'), Command::BeginCreate),
        (KeyCode::Char('e'), Command::BeginEdit),
        (KeyCode::Char('d'), Command::DeleteTask),
        (KeyCode::Backspace, Command::DeleteTask),
        (KeyCode::Char('E'), Command::Backup),
        (KeyCode::Char('h'), Command::FocusPrevious),
        (KeyCode::Left, Command::FocusPrevious),
        (KeyCode::Char('l'), Command::FocusNext),
        (KeyCode::Right, Command::FocusNext),
        (KeyCode::Char('k'), Command::CursorUp),
        (KeyCode::Up, Command::CursorUp),
        (KeyCode::Char('j'), Command::CursorDown),
        (KeyCode::Down, Command::CursorDown),
        (KeyCode::Enter, Command::MoveTask),
        (KeyCode::Char(' '), Command::MoveTask),
    ];

    for (code, expected) in cases {
        assert_eq!(command_for_key(InputMode::Idle, key(code)), Some(expected), "{:?}", code);
    }
}

#[test]
fn test_idle_unbound_keys() {
    assert_eq!(command_for_key(InputMode::Idle, key(KeyCode::Char('z'))), None);
    assert_eq!(command_for_key(InputMode::Idle, key(KeyCode::Esc)), None);
    assert_eq!(command_for_key(InputMode::Idle, key(KeyCode::Tab)), None);
}

#[test]
fn test_ctrl_c_quits_in_every_mode() {
    for mode in [InputMode::Idle, InputMode::Creating, InputMode::Editing] {
        assert_eq!(command_for_key(mode, ctrl('c')), Some(Command::Quit));
    }
}

#[test]
fn test_input_bindings() {
    for mode in [InputMode::Creating, InputMode::Editing] {
        assert_eq!(command_for_key(mode, key(KeyCode::Enter)), Some(Command::CommitInput));
        assert_eq!(command_for_key(mode, key(KeyCode::Esc)), Some(Command::CancelInput));
        assert_eq!(command_for_key(mode, key(KeyCode::Backspace)), Some(Command::EraseBackward));
        assert_eq!(command_for_key(mode, key(KeyCode::Delete)), Some(Command::EraseForward));
        assert_eq!(command_for_key(mode, key(KeyCode::Left)), Some(Command::InputLeft));
        assert_eq!(command_for_key(mode, key(KeyCode::Right)), Some(Command::InputRight));
        assert_eq!(command_for_key(mode, key(KeyCode::Home)), Some(Command::InputHome));
        assert_eq!(command_for_key(mode, key(KeyCode::End)), Some(Command::InputEnd));
    }
}

#[test]
fn test_board_keys_type_text_while_creating() {
    for c in ['q', 'n', 'e', 'd', 'E', 'h', 'j', 'k', 'l', ' '] {
        assert_eq!(
            command_for_key(InputMode::Creating, key(KeyCode::Char(c))),
            Some(Command::InsertChar(c))
        );
    }
}

#[test]
fn test_shifted_chars_are_typed() {
    let event = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
    assert_eq!(command_for_key(InputMode::Editing, event), Some(Command::InsertChar('W')));
}

#[test]
fn test_control_chords_are_not_typed() {
    assert_eq!(command_for_key(InputMode::Creating, ctrl('a')), None);
    let alt = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT);
    assert_eq!(command_for_key(InputMode::Creating, alt), None);
}

#[test]
fn test_help_text_per_mode() {
    assert!(help_text(InputMode::Idle).contains("[n] new"));
    assert!(help_text(InputMode::Idle).contains("[E] backup"));
    assert!(help_text(InputMode::Creating).contains("[Esc] cancel"));
    assert!(help_text(InputMode::Editing).contains("Edit"));
}
