//! Markdown format implementation using tree-sitter-md.
//!
//! Headings are found with a tree-sitter query so that `#` lines inside fenced code blocks are
//! not mistaken for sections. `# Name` titles the page and each `## Heading` opens a section.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn section_level(&self) -> usize {
        2
    }
}
