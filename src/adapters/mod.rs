//! Host environment adapters
//!
//! - Filesystem: staging source files into the storage directory
//! - Launcher: opening stored files in the default viewer

pub mod filesystem;
pub mod launcher;

pub use filesystem::PaperStorage;
pub use launcher::{Launcher, SystemLauncher};
