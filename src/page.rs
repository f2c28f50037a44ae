//! Lays a portfolio document out as rows at a given width.
//!
//! The page is a hero block followed by one block per section, each block a run of rows: the
//! heading, a blank spacer, the word-wrapped body and a trailing blank. The row at which a block
//! starts and the number of rows it spans are the section's geometry, so laying out again at a
//! different width moves every boundary below the first wrapped paragraph.

use crate::geometry::{GeometryProvider, SectionBounds};
use crate::input::Document;
use crate::section::Section;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest width the page is laid out at.
pub const MIN_WIDTH: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a row should be styled.
pub enum RowKind {
    /// Page title in the hero block.
    Title,
    /// Section heading.
    Heading,
    /// Heading nested inside a section body.
    Subheading,
    /// Wrapped paragraph text.
    Body,
    /// List item (first or continuation row).
    Bullet,
    /// Fenced code.
    Code,
    /// Spacer.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One rendered line of the page.
pub struct Row {
    /// Text to draw, already wrapped to the layout width.
    pub text: String,
    /// Styling category.
    pub kind: RowKind,
    /// Index of the section the row belongs to, `None` for the hero.
    pub section: Option<usize>,
}

#[derive(Clone, Debug)]
/// A document laid out at a fixed width.
pub struct Page {
    document: Document,
    width: usize,
    rows: Vec<Row>,
    bounds: Vec<SectionBounds>,
}

impl Page {
    #[must_use]
    /// Lay `document` out at `width` columns.
    pub fn new(document: Document, width: usize) -> Self {
        let mut page = Self {
            document,
            width: 0,
            rows: Vec::new(),
            bounds: Vec::new(),
        };
        page.relayout(width);
        page
    }

    /// Lay the page out again at `width` columns. Returns whether any section moved or resized.
    pub fn relayout(&mut self, width: usize) -> bool {
        let width = width.max(MIN_WIDTH);
        if width == self.width && !self.rows.is_empty() {
            return false;
        }
        let previous = std::mem::take(&mut self.bounds);
        self.width = width;
        self.rows.clear();

        if let Some(title) = &self.document.title {
            push_wrapped(&mut self.rows, title, width, RowKind::Title, None);
        }
        if !self.document.intro.is_empty() {
            if !self.rows.is_empty() {
                push_blank(&mut self.rows, None);
            }
            layout_markdown(&mut self.rows, &self.document.intro, width, None);
        }
        if !self.rows.is_empty() {
            push_blank(&mut self.rows, None);
        }

        for (index, section) in self.document.sections.iter().enumerate() {
            let top = self.rows.len();
            push_wrapped(
                &mut self.rows,
                &section.title,
                width,
                RowKind::Heading,
                Some(index),
            );
            push_blank(&mut self.rows, Some(index));
            layout_markdown(&mut self.rows, &section.body, width, Some(index));
            push_blank(&mut self.rows, Some(index));
            self.bounds
                .push(SectionBounds::new(to_row(top), to_row(self.rows.len() - top)));
        }

        tracing::debug!(width, rows = self.rows.len(), "page laid out");
        previous != self.bounds
    }

    #[must_use]
    /// Width the page is currently laid out at.
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    /// Total height in rows.
    pub fn height(&self) -> i64 {
        to_row(self.rows.len())
    }

    #[must_use]
    /// The source document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    /// Sections in navigation order.
    pub fn sections(&self) -> &[Section] {
        &self.document.sections
    }

    #[must_use]
    /// Current bounds of the section at `index`.
    pub fn bounds_at(&self, index: usize) -> Option<SectionBounds> {
        self.bounds.get(index).copied()
    }

    #[must_use]
    /// Position of section `id` in navigation order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.document.sections.iter().position(|s| s.id == id)
    }
}

impl GeometryProvider for Page {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.index_of(id).and_then(|index| self.bounds_at(index))
    }
}

fn to_row(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn push_blank(rows: &mut Vec<Row>, section: Option<usize>) {
    rows.push(Row {
        text: String::new(),
        kind: RowKind::Blank,
        section,
    });
}

fn push_wrapped(
    rows: &mut Vec<Row>,
    text: &str,
    width: usize,
    kind: RowKind,
    section: Option<usize>,
) {
    for line in wrap(text, width) {
        rows.push(Row {
            text: line,
            kind,
            section,
        });
    }
}

/// Turn a markdown body into rows: paragraphs wrap, list items hang-indent, code stays verbatim
/// (hard-broken at the width), and runs of blank lines collapse to one spacer.
///
/// Consecutive text lines form one paragraph and are wrapped together.
fn layout_markdown(rows: &mut Vec<Row>, body: &str, width: usize, section: Option<usize>) {
    let start = rows.len();
    let mut in_code = false;
    let mut last_blank = true;
    let mut paragraph = String::new();

    for line in body.lines() {
        let trimmed = line.trim();
        let fence = trimmed.starts_with("```") || trimmed.starts_with("~~~");

        if !in_code
            && !fence
            && !trimmed.is_empty()
            && atx_heading(trimmed).is_none()
            && list_item(trimmed).is_none()
        {
            if !paragraph.is_empty() {
                paragraph.push(' ');
            }
            paragraph.push_str(trimmed);
            last_blank = false;
            continue;
        }
        flush_paragraph(rows, &mut paragraph, width, section);

        if fence {
            in_code = !in_code;
            continue;
        }

        if in_code {
            if line.is_empty() {
                push_blank(rows, section);
            }
            for chunk in chunk_columns(line, width) {
                rows.push(Row {
                    text: chunk,
                    kind: RowKind::Code,
                    section,
                });
            }
            last_blank = false;
            continue;
        }

        if trimmed.is_empty() {
            if !last_blank {
                push_blank(rows, section);
            }
            last_blank = true;
            continue;
        }
        last_blank = false;

        if let Some(text) = atx_heading(trimmed) {
            push_wrapped(rows, text, width, RowKind::Subheading, section);
        } else if let Some(item) = list_item(trimmed) {
            let lines = wrap(item, width.saturating_sub(2).max(1));
            for (i, text) in lines.into_iter().enumerate() {
                let prefix = if i == 0 { "• " } else { "  " };
                rows.push(Row {
                    text: format!("{prefix}{text}"),
                    kind: RowKind::Bullet,
                    section,
                });
            }
        }
    }
    flush_paragraph(rows, &mut paragraph, width, section);

    if rows.len() > start && last_blank {
        rows.pop();
    }
}

fn flush_paragraph(
    rows: &mut Vec<Row>,
    paragraph: &mut String,
    width: usize,
    section: Option<usize>,
) {
    if !paragraph.is_empty() {
        push_wrapped(rows, paragraph, width, RowKind::Body, section);
        paragraph.clear();
    }
}

/// Text of an ATX heading line: one to six `#` followed by a space or nothing.
fn atx_heading(line: &str) -> Option<&str> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(rest.trim())
    } else {
        None
    }
}

fn list_item(line: &str) -> Option<&str> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim_start)
}

/// Greedy word wrap to `width` terminal columns; words wider than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if !current.is_empty() && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        let mut pieces = chunk_columns(word, width);
        let last = pieces.pop().unwrap_or_default();
        lines.extend(pieces);
        current_width = last.width();
        current = last;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Hard-break `text` into pieces at most `width` columns wide.
///
/// A single character wider than `width` still gets a piece of its own.
fn chunk_columns(text: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if !current.is_empty() && current_width + w > width {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
