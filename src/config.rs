use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "library.db";
pub const DEFAULT_PAPERS_DIR: &str = "papers";

/// Locations of the catalog store and the storage directory
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub db_path: PathBuf,
    pub papers_dir: PathBuf,
}

impl LibraryConfig {
    pub fn new(db_path: impl Into<PathBuf>, papers_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            papers_dir: papers_dir.into(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH, DEFAULT_PAPERS_DIR)
    }
}
