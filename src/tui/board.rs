use crate::store::{Column, StorageOperations, StoreError, Task, TaskStatus};

use super::command::{Command, Effect};
use super::input::{InputBuffer, InputMode};

/// State for the kanban board view.
///
/// Holds the three fixed columns, the focused column, the cursor within it
/// and the pending text input. Every method that changes task data reports
/// whether the board needs to be persisted; nothing here touches the
/// storage backend unless it is handed one explicitly.
#[derive(Debug, Clone)]
pub struct BoardState {
    columns: [Column; 3],
    focused: TaskStatus,
    cursor: usize,
    mode: InputMode,
    input: InputBuffer,
}

impl BoardState {
    /// Empty board: three empty columns, focus on To Do
    pub fn new() -> Self {
        Self::with_char_limit(super::input::DEFAULT_CHAR_LIMIT)
    }

    pub fn with_char_limit(char_limit: usize) -> Self {
        Self {
            columns: TaskStatus::columns().map(Column::empty),
            focused: TaskStatus::ToDo,
            cursor: 0,
            mode: InputMode::Idle,
            input: InputBuffer::new(char_limit),
        }
    }

    /// Board built from stored columns, normalized into the fixed layout
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let mut board = Self::new();
        board.replace_columns(columns);
        board
    }

    /// Empty board overwritten by whatever the store holds.
    /// Storage failures are logged and leave the empty board in place.
    pub fn initialize(store: &dyn StorageOperations, char_limit: usize) -> Self {
        let mut board = Self::with_char_limit(char_limit);
        if let Err(e) = board.load(store) {
            tracing::warn!("Starting with an empty board: {:#}", anyhow::Error::from(e));
        }
        board
    }

    /// Replace the columns with the stored snapshot.
    ///
    /// Returns `Ok(false)` when nothing is stored yet. On error the board is
    /// left untouched.
    pub fn load(&mut self, store: &dyn StorageOperations) -> Result<bool, StoreError> {
        match store.load()? {
            Some(columns) => {
                self.replace_columns(columns);
                tracing::info!(
                    "Loaded board: {} / {} / {} tasks",
                    self.columns[0].len(),
                    self.columns[1].len(),
                    self.columns[2].len()
                );
                Ok(true)
            }
            None => {
                tracing::info!("No saved board found, starting empty");
                Ok(false)
            }
        }
    }

    pub fn save(&self, store: &dyn StorageOperations) -> Result<(), StoreError> {
        store.save(&self.columns)
    }

    pub fn backup(&self, store: &dyn StorageOperations) -> Result<(), StoreError> {
        store.backup(&self.columns)
    }

    fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = normalize_columns(columns);
        self.cursor = 0;
    }

    pub fn columns(&self) -> &[Column; 3] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.index()]
    }

    /// Tasks of a column, in display order
    pub fn tasks_in_column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.index()].tasks
    }

    pub fn focused(&self) -> TaskStatus {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn pending_input(&self) -> &str {
        self.input.value()
    }

    /// Get the currently selected task
    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column().tasks.get(self.cursor)
    }

    fn focused_column(&self) -> &Column {
        &self.columns[self.focused.index()]
    }

    fn focused_column_mut(&mut self) -> &mut Column {
        &mut self.columns[self.focused.index()]
    }

    // === Navigation ===

    /// Move focus one column to the left
    pub fn focus_previous(&mut self) {
        if !self.mode.is_idle() || self.focused.is_first() {
            return;
        }
        if let Some(prev) = TaskStatus::from_index(self.focused.index() - 1) {
            self.focused = prev;
            self.cursor = 0;
        }
    }

    /// Move focus one column to the right
    pub fn focus_next(&mut self) {
        if !self.mode.is_idle() || self.focused.is_last() {
            return;
        }
        if let Some(next) = TaskStatus::from_index(self.focused.index() + 1) {
            self.focused = next;
            self.cursor = 0;
        }
    }

    /// Move selection up
    pub fn cursor_up(&mut self) {
        if self.mode.is_idle() && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move selection down
    pub fn cursor_down(&mut self) {
        if !self.mode.is_idle() {
            return;
        }
        let count = self.focused_column().len();
        if self.cursor < count.saturating_sub(1) {
            self.cursor += 1;
        }
    }

    // === Task mutation ===

    /// Start typing a new task
    pub fn begin_create(&mut self) {
        if !self.mode.is_idle() {
            return;
        }
        self.mode = InputMode::Creating;
        self.input.clear();
    }

    /// Start editing the selected task, pre-filled with its title
    pub fn begin_edit(&mut self) {
        if !self.mode.is_idle() {
            return;
        }
        let Some(title) = self.selected_task().map(|t| t.title.clone()) else {
            return;
        };
        self.mode = InputMode::Editing;
        self.input.set(&title);
    }

    /// Replace the pending input wholesale (paste, tests)
    pub fn set_pending_input(&mut self, text: &str) {
        if !self.mode.is_idle() {
            self.input.set(text);
        }
    }

    /// Finish creating or editing.
    ///
    /// New tasks always land at the end of To Do, whichever column is
    /// focused. Empty input changes no task. Returns `true` when the
    /// command was accepted, in which case the board must be persisted.
    pub fn commit_input(&mut self) -> bool {
        let mode = self.mode;
        if mode.is_idle() {
            return false;
        }
        let text = self.input.take();
        self.mode = InputMode::Idle;

        if text.is_empty() {
            return true;
        }
        match mode {
            InputMode::Creating => {
                tracing::debug!("Creating task: {}", text);
                self.columns[TaskStatus::ToDo.index()].tasks.push(Task::new(text));
            }
            InputMode::Editing => {
                let cursor = self.cursor;
                if let Some(task) = self.focused_column_mut().tasks.get_mut(cursor) {
                    tracing::debug!("Renamed task: {} -> {}", task.title, text);
                    task.title = text;
                }
            }
            InputMode::Idle => {}
        }
        true
    }

    /// Abandon creating or editing without touching any task
    pub fn cancel_input(&mut self) {
        if self.mode.is_idle() {
            return;
        }
        self.input.clear();
        self.mode = InputMode::Idle;
    }

    /// Remove the selected task. Returns `true` if a task was removed.
    pub fn delete_task(&mut self) -> bool {
        if !self.mode.is_idle() {
            return false;
        }
        match self.take_selected() {
            Some(task) => {
                tracing::debug!("Deleted task: {}", task.title);
                true
            }
            None => false,
        }
    }

    /// Send the selected task to the end of the next column, wrapping from
    /// Done back to To Do. Focus and cursor stay on the source column.
    /// Returns `true` if a task was moved.
    pub fn move_task(&mut self) -> bool {
        if !self.mode.is_idle() {
            return false;
        }
        let Some(mut task) = self.take_selected() else {
            return false;
        };
        let destination = self.focused.next();
        tracing::debug!(
            "Moving task {} from {} to {}",
            task.title,
            self.focused.as_str(),
            destination.as_str()
        );
        task.status = destination;
        self.columns[destination.index()].tasks.push(task);
        true
    }

    /// Remove the task under the cursor, keeping the cursor on the last
    /// element instead of past the end
    fn take_selected(&mut self) -> Option<Task> {
        let cursor = self.cursor;
        let column = self.focused_column_mut();
        if cursor >= column.len() {
            return None;
        }
        let task = column.tasks.remove(cursor);
        let remaining = column.len();
        if self.cursor >= remaining && self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(task)
    }

    // === Text input ===

    fn edit_input(&mut self, f: impl FnOnce(&mut InputBuffer)) {
        if !self.mode.is_idle() {
            f(&mut self.input);
        }
    }

    /// Apply a command and report the side effects the caller must run
    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Quit => return vec![Effect::Quit],
            Command::Backup => {
                if self.mode.is_idle() {
                    return vec![Effect::Backup];
                }
            }
            Command::BeginCreate => self.begin_create(),
            Command::BeginEdit => self.begin_edit(),
            Command::CommitInput => {
                if self.commit_input() {
                    return vec![Effect::Persist];
                }
            }
            Command::CancelInput => self.cancel_input(),
            Command::DeleteTask => {
                if self.delete_task() {
                    return vec![Effect::Persist];
                }
            }
            Command::MoveTask => {
                if self.move_task() {
                    return vec![Effect::Persist];
                }
            }
            Command::FocusPrevious => self.focus_previous(),
            Command::FocusNext => self.focus_next(),
            Command::CursorUp => self.cursor_up(),
            Command::CursorDown => self.cursor_down(),
            Command::InsertChar(c) => self.edit_input(|input| input.insert(c)),
            Command::EraseBackward => self.edit_input(InputBuffer::backspace),
            Command::EraseForward => self.edit_input(InputBuffer::delete),
            Command::InputLeft => self.edit_input(InputBuffer::move_left),
            Command::InputRight => self.edit_input(InputBuffer::move_right),
            Command::InputHome => self.edit_input(InputBuffer::move_home),
            Command::InputEnd => self.edit_input(InputBuffer::move_end),
        }
        Vec::new()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fit stored columns into the fixed three-column layout.
///
/// Each column lands in the slot named by its status, repeated statuses are
/// merged in file order, and every task takes the status of its slot.
pub fn normalize_columns(stored: Vec<Column>) -> [Column; 3] {
    let mut columns = TaskStatus::columns().map(Column::empty);
    for column in stored {
        let status = column.status;
        let slot = &mut columns[status.index()];
        if !column.title.trim().is_empty() {
            slot.title = column.title;
        }
        slot.width = column.width;
        slot.tasks
            .extend(column.tasks.into_iter().map(|task| task.with_status(status)));
    }
    columns
}
