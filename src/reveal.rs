//! One-shot reveal of sections as they first scroll into view.
//!
//! A section is revealed the first time enough of it intersects the viewport, where the viewport
//! is grown by a margin on both edges so sections start appearing just before they arrive. Once
//! revealed a section stays revealed for the life of the page, however far it is scrolled away.

use crate::geometry::{GeometryProvider, SectionBounds};
use std::collections::HashSet;

#[derive(Clone, Debug)]
/// Remembers which sections have been seen at least once.
pub struct RevealTracker {
    sections: Vec<String>,
    threshold: f64,
    margin: i64,
    revealed: HashSet<String>,
}

impl RevealTracker {
    #[must_use]
    /// Watch `sections`, revealing each once `threshold` of it is within `margin` rows of view.
    pub fn new<I, S>(sections: I, threshold: f64, margin: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            threshold: threshold.clamp(0.0, 1.0),
            margin,
            revealed: HashSet::new(),
        }
    }

    #[must_use]
    /// Whether section `id` has been revealed.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    #[must_use]
    /// Number of sections revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Check every unrevealed section against the viewport at `top` spanning `height` rows.
    ///
    /// Returns the identifiers revealed by this call, in navigation order.
    pub fn update<G>(&mut self, top: i64, height: i64, geometry: &G) -> Vec<String>
    where
        G: GeometryProvider + ?Sized,
    {
        let view_top = top - self.margin;
        let view_bottom = top + height + self.margin;

        let newly: Vec<String> = self
            .sections
            .iter()
            .filter(|id| !self.revealed.contains(id.as_str()))
            .filter(|id| {
                geometry.bounds(id).is_some_and(|bounds| {
                    let ratio = intersection_ratio(bounds, view_top, view_bottom);
                    ratio > 0.0 && ratio >= self.threshold
                })
            })
            .cloned()
            .collect();

        for id in &newly {
            tracing::trace!(id, "section revealed");
            self.revealed.insert(id.clone());
        }
        newly
    }
}

/// Fraction of `bounds` lying inside `[view_top, view_bottom)`.
///
/// An empty section counts as fully visible when its top is inside the range.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn intersection_ratio(bounds: SectionBounds, view_top: i64, view_bottom: i64) -> f64 {
    if bounds.height <= 0 {
        return if (view_top..view_bottom).contains(&bounds.top) {
            1.0
        } else {
            0.0
        };
    }
    let overlap = bounds.bottom().min(view_bottom) - bounds.top.max(view_top);
    if overlap <= 0 {
        0.0
    } else {
        overlap as f64 / bounds.height as f64
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod tests;
