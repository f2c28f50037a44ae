//! Format trait and implementations for different document types.
//!
//! A format supplies the tree-sitter grammar and the query that finds headings, plus the heading
//! depth that starts a new page section. Only markdown is implemented.

pub mod markdown;

/// Grammar and queries needed to split a document into page sections.
pub trait Format {
    /// Tree-sitter grammar for the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node.
    fn heading_query(&self) -> &str;
    /// Heading depth that starts a navigable section; shallower headings title the page.
    fn section_level(&self) -> usize;
}
