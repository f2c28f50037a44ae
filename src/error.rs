//! Errors raised while loading and laying out a portfolio document.
//!
//! The scroll tracker itself never fails: a missing section is a normal "nothing active" outcome.
//! Everything that can go wrong happens before the page is on screen.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
/// Failures from reading, parsing or reporting on a document.
pub enum Error {
    /// Reading the document or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The heading query did not compile against the grammar.
    #[error("invalid heading query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The parser gave up without producing a syntax tree.
    #[error("failed to parse document")]
    Parse,
    /// The document has no headings to navigate between.
    #[error("no sections found in {}", .0.display())]
    NoSections(PathBuf),
    /// The configuration file could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Serialising the layout report failed.
    #[error("failed to serialise layout report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
