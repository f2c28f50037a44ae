//! Live section geometry, injected into the tracker as a capability.
//!
//! The tracker never measures anything itself. It asks a [`GeometryProvider`] for the current
//! top offset and height of each section every time it recomputes, so layout changes are picked
//! up without any cache to invalidate. The laid-out [`Page`](crate::page::Page) is the real
//! provider; a plain map or an [`FnGeometry`] closure stands in for it in tests.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Current position of a rendered section, in document rows.
pub struct SectionBounds {
    /// Offset of the first row of the section from the top of the document.
    pub top: i64,
    /// Number of rows the section occupies.
    pub height: i64,
}

impl SectionBounds {
    #[must_use]
    /// Bounds starting at `top` spanning `height` rows.
    pub fn new(top: i64, height: i64) -> Self {
        Self { top, height }
    }

    #[must_use]
    /// First row past the end of the section.
    pub fn bottom(&self) -> i64 {
        self.top.saturating_add(self.height)
    }

    #[must_use]
    /// Activation interval with the top pulled up by `margin` rows.
    ///
    /// Both ends saturate at the `i64` limits rather than wrapping.
    pub fn activation_interval(&self, margin: i64) -> Interval {
        let top = self.top.saturating_sub(margin);
        Interval {
            top,
            bottom: top.saturating_add(self.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open range of scroll offsets `[top, bottom)`.
pub struct Interval {
    /// Inclusive lower bound.
    pub top: i64,
    /// Exclusive upper bound.
    pub bottom: i64,
}

impl Interval {
    #[must_use]
    /// Whether `offset` falls inside the range.
    pub fn contains(&self, offset: i64) -> bool {
        self.top <= offset && offset < self.bottom
    }
}

/// Resolves a section identifier to its current bounds.
///
/// Returns `None` when nothing with that identifier is rendered.
pub trait GeometryProvider {
    /// Current bounds of the section named `id`, if present.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

impl GeometryProvider for HashMap<String, SectionBounds> {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

impl GeometryProvider for BTreeMap<String, SectionBounds> {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

/// Geometry computed by a function from identifier to bounds.
///
/// ```
/// use folio::geometry::{FnGeometry, GeometryProvider, SectionBounds};
///
/// let geometry = FnGeometry(|id: &str| (id == "about").then_some(SectionBounds::new(0, 10)));
/// assert_eq!(geometry.bounds("about"), Some(SectionBounds::new(0, 10)));
/// assert_eq!(geometry.bounds("contact"), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnGeometry<F>(pub F);

impl<F> GeometryProvider for FnGeometry<F>
where
    F: Fn(&str) -> Option<SectionBounds>,
{
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        (self.0)(id)
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        (**self).bounds(id)
    }
}
