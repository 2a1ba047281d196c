//! Paper repository for database operations on papers

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use super::DatabaseError;
use crate::models::paper::{NewPaper, Paper};

/// Repository for Paper operations
pub struct PaperRepo<'a> {
    conn: &'a Connection,
}

impl<'a> PaperRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new paper and return its assigned id
    pub fn insert(&self, paper: &NewPaper, filename: &str) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO papers (title, authors, year, filename) VALUES (?, ?, ?, ?)",
            params![paper.title, paper.authors, paper.year, filename],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted paper {} ({})", id, paper.title);
        Ok(id)
    }

    /// All papers in ascending id order
    pub fn list_all(&self) -> Result<Vec<Paper>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, authors, year, filename FROM papers ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], row_to_paper)?;

        let mut papers = Vec::new();
        for row in rows {
            papers.push(row?);
        }

        Ok(papers)
    }

    /// Get a paper by id
    pub fn get(&self, id: i64) -> Result<Option<Paper>, DatabaseError> {
        let paper = self
            .conn
            .query_row(
                "SELECT id, title, authors, year, filename FROM papers WHERE id = ?",
                [id],
                row_to_paper,
            )
            .optional()?;

        Ok(paper)
    }
}

fn row_to_paper(row: &Row) -> rusqlite::Result<Paper> {
    Ok(Paper {
        id: row.get("id")?,
        title: row.get("title")?,
        authors: row.get("authors")?,
        year: row.get("year")?,
        filename: row.get("filename")?,
    })
}
