use serde::{Deserialize, Serialize};

/// Task status in the kanban board.
///
/// Persisted as its column ordinal (0, 1, 2) to stay compatible with
/// existing board files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    #[default]
    ToDo,
    Doing,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }

    /// Display label of the column holding tasks with this status
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::Doing => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn columns() -> &'static [TaskStatus; 3] {
        &[TaskStatus::ToDo, TaskStatus::Doing, TaskStatus::Done]
    }

    /// Position of this status' column on the board
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::columns().get(index).copied()
    }

    /// Next column in cyclic order, wrapping Done back to ToDo
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::ToDo => TaskStatus::Doing,
            TaskStatus::Doing => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::ToDo,
        }
    }

    pub fn is_first(&self) -> bool {
        *self == TaskStatus::ToDo
    }

    pub fn is_last(&self) -> bool {
        *self == TaskStatus::Done
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value as usize).ok_or_else(|| format!("invalid task status {}", value))
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        status as u8
    }
}

/// A task on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            status: TaskStatus::ToDo,
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// One of the three fixed columns, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub status: TaskStatus,
    #[serde(default)]
    pub title: String,
    /// Kept for file compatibility, layout is computed at render time
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn empty(status: TaskStatus) -> Self {
        Self {
            status,
            title: status.label().to_string(),
            width: 0,
            tasks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
