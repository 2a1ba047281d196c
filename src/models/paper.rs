use serde::Serialize;

/// A cataloged paper. Rows are never updated once inserted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Paper {
    pub id: i64,
    pub title: String,
    pub authors: String,
    pub year: i32,
    /// Path of the staged copy, as returned by staging.
    pub filename: String,
}

/// Metadata supplied by the user when adding a paper
#[derive(Debug, Clone)]
pub struct NewPaper {
    pub title: String,
    pub authors: String,
    pub year: i32,
}

impl Paper {
    /// One-line listing form: `{id}: {title} ({year}) - {authors}`
    pub fn summary_line(&self) -> String {
        format!("{}: {} ({}) - {}", self.id, self.title, self.year, self.authors)
    }

    /// Citation form: `{authors} ({year}) {title}.`
    pub fn citation(&self) -> String {
        format!("{} ({}) {}.", self.authors, self.year, self.title)
    }
}
