//! Machine-readable summary of a laid-out page.
//!
//! `folio --layout` prints this instead of starting the TUI, which makes it easy to check where
//! each section lands at a given width and which one a given scroll offset would highlight.

use crate::page::Page;
use crate::tracker::ActiveSectionTracker;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Section intervals for a page at one width.
pub struct LayoutReport {
    /// Page title, if the document has one.
    pub title: Option<String>,
    /// Column width the page was laid out at.
    pub width: usize,
    /// Total rows.
    pub height: i64,
    /// Rows each section's top is pulled up by before matching.
    pub activation_margin: i64,
    /// Every section in navigation order.
    pub sections: Vec<SectionReport>,
    /// Scroll offset the `active` field was computed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<i64>,
    /// Section active at `at`, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Where one section sits on the page.
pub struct SectionReport {
    /// Anchor identifier.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// First row.
    pub top: i64,
    /// Rows spanned.
    pub height: i64,
    /// Range of scroll offsets that make this section active, `[start, end)`.
    pub active_range: [i64; 2],
}

impl LayoutReport {
    #[must_use]
    /// Summarise `page`, resolving the active section at `at` if given.
    pub fn new(page: &Page, activation_margin: i64, at: Option<i64>) -> Self {
        let sections = page
            .sections()
            .iter()
            .enumerate()
            .filter_map(|(index, section)| {
                let bounds = page.bounds_at(index)?;
                let interval = bounds.activation_interval(activation_margin);
                Some(SectionReport {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    top: bounds.top,
                    height: bounds.height,
                    active_range: [interval.top, interval.bottom],
                })
            })
            .collect();

        let active = at.and_then(|offset| {
            let ids = page.sections().iter().map(|s| s.id.clone());
            let tracker = ActiveSectionTracker::new(ids, activation_margin);
            tracker.resolve(offset, page).map(str::to_string)
        });

        Self {
            title: page.document().title.clone(),
            width: page.width(),
            height: page.height(),
            activation_margin,
            sections,
            at,
            active,
        }
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
