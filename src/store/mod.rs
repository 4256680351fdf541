mod file;
mod models;
mod operations;

pub use file::FileStore;
pub use models::*;
pub use operations::*;

use std::path::PathBuf;

/// Default primary board file, relative to the working directory
pub const DEFAULT_BOARD_FILE: &str = "board.json";

/// Default backup file, relative to the working directory
pub const DEFAULT_BACKUP_FILE: &str = "backup_kanban.json";

/// Failures of the storage backend.
///
/// None of these are shown to the user; callers log them and keep the
/// in-memory board as the source of truth.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read board file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse board file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize board")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write board file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
