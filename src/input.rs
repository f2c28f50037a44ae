//! Loading a portfolio document and splitting it into page sections.
//!
//! The document is parsed with tree-sitter to find headings. The first heading shallower than the
//! format's section level titles the page, the text between it and the first section becomes the
//! hero intro, and every heading at the section level (or shallower, once sections have started)
//! opens a new section whose body runs until the next such heading.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::section::{slugify, split_anchor, unique_id, Section};
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq)]
/// A parsed portfolio: page title, hero text and sections in navigation order.
pub struct Document {
    /// Text of the top-level heading, if the document has one before its first section.
    pub title: Option<String>,
    /// Markdown between the title and the first section.
    pub intro: String,
    /// Navigable sections in document order.
    pub sections: Vec<Section>,
}

impl Document {
    #[must_use]
    /// Section identifiers in navigation order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A heading located in the source text.
pub struct Heading {
    /// Number of leading `#` markers.
    pub level: usize,
    /// Heading text without markers.
    pub text: String,
    /// Zero-based source line.
    pub line: usize,
    /// Byte offset where the heading starts.
    pub start_byte: usize,
    /// Byte offset just past the heading.
    pub end_byte: usize,
}

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing fails, or it contains no sections.
pub fn load_document(path: &Path, format: &impl Format) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    let document = parse_document(&source, format)?;
    if document.sections.is_empty() {
        return Err(Error::NoSections(path.to_path_buf()));
    }
    tracing::info!(
        path = %path.display(),
        sections = document.sections.len(),
        "loaded portfolio"
    );
    Ok(document)
}

/// Split `source` into title, intro and sections.
///
/// # Errors
///
/// Returns an error if the grammar or heading query cannot be loaded, or parsing fails.
pub fn parse_document(source: &str, format: &impl Format) -> Result<Document> {
    let section_level = format.section_level();
    let headings: Vec<Heading> = find_headings(source, format)?
        .into_iter()
        .filter(|h| h.level <= section_level)
        .collect();

    let mut title = None;
    let mut intro_start = 0;
    let mut intro_end = source.len();
    let mut sections: Vec<Section> = Vec::new();
    let mut taken: Vec<String> = Vec::new();

    for (i, heading) in headings.iter().enumerate() {
        if heading.level < section_level && sections.is_empty() && title.is_none() {
            title = Some(heading.text.clone());
            intro_start = heading.end_byte;
            continue;
        }

        if sections.is_empty() {
            intro_end = heading.start_byte;
        }

        let body_end = headings
            .get(i + 1)
            .map_or(source.len(), |next| next.start_byte);
        let body = source
            .get(heading.end_byte..body_end)
            .map(trim_blank_lines)
            .unwrap_or_default();

        let (label, anchor) = split_anchor(&heading.text);
        let id = unique_id(anchor.map_or_else(|| slugify(label), slugify), &taken);
        taken.push(id.clone());

        sections.push(Section {
            id,
            title: label.to_string(),
            level: heading.level,
            line: heading.line,
            body,
        });
    }

    let intro = source
        .get(intro_start..intro_end.max(intro_start))
        .map(trim_blank_lines)
        .unwrap_or_default();

    Ok(Document {
        title,
        intro,
        sections,
    })
}

/// Locate every heading in `source`, in document order.
///
/// # Errors
///
/// Returns an error if the grammar or heading query cannot be loaded, or parsing fails.
pub fn find_headings(source: &str, format: &impl Format) -> Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser.parse(source, None).ok_or(Error::Parse)?;
    let query = Query::new(&language, format.heading_query())?;

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    let mut headings = Vec::new();

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let raw = source.get(node.byte_range()).unwrap_or_default();
            let line = raw.lines().next().unwrap_or_default().trim();
            let level = line.chars().take_while(|&c| c == '#').count();
            if level == 0 {
                continue;
            }
            headings.push(Heading {
                level,
                text: heading_text(line).to_string(),
                line: node.start_position().row,
                start_byte: node.start_byte(),
                end_byte: node.end_byte(),
            });
        }
    }

    headings.sort_by_key(|h| h.start_byte);
    headings.dedup_by_key(|h| h.start_byte);
    Ok(headings)
}

/// Strip the opening `#` run and any closing `#` sequence from an ATX heading line.
fn heading_text(line: &str) -> &str {
    let text = line.trim_start_matches('#').trim();
    let without_closing = text.trim_end_matches('#');
    if without_closing.is_empty() {
        return "";
    }
    if without_closing.len() != text.len() && without_closing.ends_with(char::is_whitespace) {
        without_closing.trim_end()
    } else {
        text
    }
}

fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
