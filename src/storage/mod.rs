//! Storage module for the SQLite catalog store
//!
//! This module provides:
//! - Database connection management
//! - Idempotent schema creation
//! - The paper repository

pub mod db;
pub mod paper_repo;

pub use db::{init_store, Database, DatabaseError};
pub use paper_repo::PaperRepo;
