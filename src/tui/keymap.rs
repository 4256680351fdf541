use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::input::InputMode;

/// Translate a key press into a board command for the current mode.
///
/// Ctrl+C quits from anywhere. While creating or editing, every other key
/// goes to the text input.
pub fn command_for_key(mode: InputMode, key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match mode {
        InputMode::Idle => board_command(key.code),
        InputMode::Creating | InputMode::Editing => input_command(key),
    }
}

fn board_command(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('n') => Command::BeginCreate,
        KeyCode::Char('e') => Command::BeginEdit,
        KeyCode::Char('d') | KeyCode::Backspace => Command::DeleteTask,
        KeyCode::Char('E') => Command::Backup,
        KeyCode::Char('h') | KeyCode::Left => Command::FocusPrevious,
        KeyCode::Char('l') | KeyCode::Right => Command::FocusNext,
        KeyCode::Char('k') | KeyCode::Up => Command::CursorUp,
        KeyCode::Char('j') | KeyCode::Down => Command::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => Command::MoveTask,
        _ => return None,
    };
    Some(command)
}

fn input_command(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Enter => Command::CommitInput,
        KeyCode::Esc => Command::CancelInput,
        KeyCode::Backspace => Command::EraseBackward,
        KeyCode::Delete => Command::EraseForward,
        KeyCode::Left => Command::InputLeft,
        KeyCode::Right => Command::InputRight,
        KeyCode::Home => Command::InputHome,
        KeyCode::End => Command::InputEnd,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Command::InsertChar(c)
        }
        _ => return None,
    };
    Some(command)
}

/// Footer help text for the current mode
pub fn help_text(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Idle => {
            " [n] new  [e] edit  [d] del  [Enter] move  [h/l] column  [j/k] task  [E] backup  [q] quit "
        }
        InputMode::Creating => " New task... [Enter] save  [Esc] cancel ",
        InputMode::Editing => " Edit task... [Enter] save  [Esc] cancel ",
    }
}
