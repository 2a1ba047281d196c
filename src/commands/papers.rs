//! Paper catalog commands
//!
//! Each command opens its own connection to the store and closes it before
//! returning.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::adapters::{Launcher, PaperStorage};
use crate::config::LibraryConfig;
use crate::error::CatalogError;
use crate::models::{NewPaper, Paper};
use crate::storage::{Database, PaperRepo};

/// Stage `source` into the storage directory and record it
///
/// Returns the id assigned to the new record. A staged file is left in place
/// if recording it fails.
pub fn add_paper(
    config: &LibraryConfig,
    source: &Path,
    paper: &NewPaper,
) -> Result<i64, CatalogError> {
    let storage = PaperStorage::new(&config.papers_dir);
    let staged = storage.stage(source)?;
    let filename = staged.to_string_lossy().into_owned();

    let id = insert_record(config, paper, &filename).map_err(|e| {
        warn!("{} was staged but has no catalog record: {}", filename, e);
        e
    })?;

    info!("Added paper {}: {}", id, paper.title);
    Ok(id)
}

fn insert_record(
    config: &LibraryConfig,
    paper: &NewPaper,
    filename: &str,
) -> Result<i64, CatalogError> {
    let db = Database::open(&config.db_path)?;
    let id = PaperRepo::new(&db.conn).insert(paper, filename)?;
    Ok(id)
}

/// All papers in ascending id order
pub fn list_papers(config: &LibraryConfig) -> Result<Vec<Paper>, CatalogError> {
    let db = Database::open(&config.db_path)?;
    let papers = PaperRepo::new(&db.conn).list_all()?;
    Ok(papers)
}

/// Open the stored copy of a paper in the default viewer
///
/// Returns the absolute path that was handed to the launcher. Launch failures
/// are logged, not returned.
pub fn view_paper(
    config: &LibraryConfig,
    launcher: &dyn Launcher,
    id: i64,
) -> Result<PathBuf, CatalogError> {
    let paper = find_paper(config, id)?;
    let path = std::path::absolute(&paper.filename)?;
    let url = format!("file://{}", path.display());

    if let Err(e) = launcher.open(&url) {
        warn!("Failed to open {}: {}", url, e);
    }

    Ok(path)
}

/// Citation string for a paper
pub fn cite_paper(config: &LibraryConfig, id: i64) -> Result<String, CatalogError> {
    let paper = find_paper(config, id)?;
    Ok(paper.citation())
}

fn find_paper(config: &LibraryConfig, id: i64) -> Result<Paper, CatalogError> {
    let db = Database::open(&config.db_path)?;
    PaperRepo::new(&db.conn)
        .get(id)?
        .ok_or(CatalogError::RecordNotFound(id))
}
