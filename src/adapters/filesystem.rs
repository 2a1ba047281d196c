//! Filesystem adapter
//!
//! Owns the storage directory that holds copied paper files.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::CatalogError;

/// Adapter for the paper storage directory
#[derive(Debug, Clone)]
pub struct PaperStorage {
    papers_dir: PathBuf,
}

impl PaperStorage {
    pub fn new(papers_dir: impl Into<PathBuf>) -> Self {
        Self {
            papers_dir: papers_dir.into(),
        }
    }

    pub fn papers_dir(&self) -> &Path {
        &self.papers_dir
    }

    /// Copy a source file into the storage directory under a free name
    ///
    /// # Arguments
    /// * `source` - Path to an existing regular file
    ///
    /// # Returns
    /// * `Ok(path)` - Storage directory joined with the resolved file name
    /// * `Err(CatalogError::FileNotFound)` - If `source` is not a regular file;
    ///   nothing is created in that case
    pub fn stage(&self, source: &Path) -> Result<PathBuf, CatalogError> {
        if !source.is_file() {
            return Err(CatalogError::FileNotFound(source.to_path_buf()));
        }
        let file_name = source
            .file_name()
            .ok_or_else(|| CatalogError::FileNotFound(source.to_path_buf()))?;

        fs::create_dir_all(&self.papers_dir)?;

        let dest = self.free_destination(file_name)?;
        copy_with_metadata(source, &dest)?;

        info!("Staged {:?} as {:?}", source, dest);
        Ok(dest)
    }

    /// First path in the storage directory that nothing occupies yet
    fn free_destination(&self, file_name: &OsStr) -> io::Result<PathBuf> {
        let mut dest = self.papers_dir.join(file_name);
        let mut counter = 1u32;
        while dest.try_exists()? {
            debug!("{:?} is taken", dest);
            dest = self.papers_dir.join(suffixed_name(file_name, counter));
            counter += 1;
        }
        Ok(dest)
    }
}

/// `name.ext` -> `name_{counter}.ext`
fn suffixed_name(file_name: &OsStr, counter: u32) -> OsString {
    let path = Path::new(file_name);
    let mut name = path.file_stem().unwrap_or(file_name).to_os_string();
    name.push(format!("_{}", counter));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Copy contents, timestamps and permissions. Fails rather than overwrite `dest`.
fn copy_with_metadata(source: &Path, dest: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;

    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(dest)?;
    io::copy(&mut reader, &mut writer)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times)?;
    drop(writer);

    fs::set_permissions(dest, meta.permissions())?;
    Ok(())
}
