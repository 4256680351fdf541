use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Column, StorageOperations, StoreError, Task, TaskStatus};

/// Column as read from disk. A record without a status takes the status of
/// its position in the file; records past the third default to To Do.
#[derive(Debug, Deserialize)]
struct ColumnRecord {
    #[serde(default)]
    status: Option<TaskStatus>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    width: i32,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl ColumnRecord {
    fn into_column(self, position: usize) -> Column {
        let status = self
            .status
            .or_else(|| TaskStatus::from_index(position))
            .unwrap_or_default();
        Column {
            status,
            title: self.title,
            width: self.width,
            tasks: self.tasks,
        }
    }
}

/// JSON file backend.
///
/// Both paths are used as given, so relative paths resolve against the
/// working directory of the process.
#[derive(Debug, Clone)]
pub struct FileStore {
    board_path: PathBuf,
    backup_path: PathBuf,
}

impl FileStore {
    pub fn new(board_path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            board_path: board_path.into(),
            backup_path: backup_path.into(),
        }
    }

    fn write_columns(path: &Path, columns: &[Column]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(columns).map_err(StoreError::Serialize)?;
        std::fs::write(path, content).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote {} columns", columns.len());
        Ok(())
    }
}

impl StorageOperations for FileStore {
    fn load(&self) -> Result<Option<Vec<Column>>, StoreError> {
        let content = match std::fs::read_to_string(&self.board_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.board_path.clone(),
                    source,
                })
            }
        };

        let records: Vec<ColumnRecord> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.board_path.clone(),
                source,
            })?;
        let columns = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_column(position))
            .collect();
        Ok(Some(columns))
    }

    fn save(&self, columns: &[Column]) -> Result<(), StoreError> {
        Self::write_columns(&self.board_path, columns)
    }

    fn backup(&self, columns: &[Column]) -> Result<(), StoreError> {
        Self::write_columns(&self.backup_path, columns)
    }
}
