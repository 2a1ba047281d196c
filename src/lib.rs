//! Local catalog of reference papers: stores copies of PDFs alongside a
//! SQLite table of their metadata.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::LibraryConfig;
pub use error::CatalogError;
