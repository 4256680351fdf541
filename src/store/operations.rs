//! Trait for the board storage backend to enable testing with mocks.

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

use super::{Column, StoreError};

/// Operations for reading and writing board snapshots
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait StorageOperations {
    /// Read the primary board file.
    /// Returns `Ok(None)` when there is nothing stored yet.
    fn load(&self) -> Result<Option<Vec<Column>>, StoreError>;

    /// Overwrite the primary board file with the given columns
    fn save(&self, columns: &[Column]) -> Result<(), StoreError>;

    /// Overwrite the backup file with the given columns.
    /// The backup is never read back by `load`.
    fn backup(&self, columns: &[Column]) -> Result<(), StoreError>;
}
