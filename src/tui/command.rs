/// Semantic commands understood by the board, decoupled from raw keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    BeginCreate,
    BeginEdit,
    CommitInput,
    CancelInput,
    DeleteTask,
    Backup,
    FocusPrevious,
    FocusNext,
    CursorUp,
    CursorDown,
    MoveTask,
    // Text editing while creating/editing
    InsertChar(char),
    EraseBackward,
    EraseForward,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
}

/// Side effects requested by a command, executed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the board to the primary file
    Persist,
    /// Write the board to the backup file
    Backup,
    Quit,
}
