use std::path::PathBuf;
use thiserror::Error;

use crate::storage::DatabaseError;

/// Errors raised by catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Paper not found.")]
    RecordNotFound(i64),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Conditions reported to the user as a single line rather than treated as failures
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CatalogError::FileNotFound(_) | CatalogError::RecordNotFound(_)
        )
    }
}
