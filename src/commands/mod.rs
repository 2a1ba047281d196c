pub mod papers;

pub use papers::{add_paper, cite_paper, list_papers, view_paper};
