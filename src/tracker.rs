//! Active-section tracking driven by scroll and resize events.
//!
//! The tracker owns a fixed, ordered list of section identifiers and publishes which one is
//! currently "in view" for the navigation bar to highlight. It has no geometry of its own: every
//! recompute asks the injected [`GeometryProvider`] for live bounds, pulls each section's top up
//! by the activation margin, and picks the section whose half-open interval contains the scroll
//! offset.
//!
//! ```text
//!            ┌──────────────┐
//!            │     None     │ <- offset above the first section / past the last
//!            └──────────────┘
//!              ^          |
//!   recompute  |          |  recompute
//!              |          v
//!            ┌──────────────┐
//!            │  Active(S)   │ <- any S in the fixed set, jumps allowed
//!            └──────────────┘
//! ```
//!
//! # Cadence
//!
//! [`handle`](ActiveSectionTracker::handle) recomputes immediately for every event. The event
//! loop instead calls [`notify`](ActiveSectionTracker::notify) as events arrive and
//! [`flush`](ActiveSectionTracker::flush) once per frame, which coalesces a burst of scroll
//! events into a single recompute against the settled offset.

use crate::geometry::GeometryProvider;
use crate::observable::{Observable, SubscriptionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Reasons the section intervals need re-evaluating.
pub enum TrackerEvent {
    /// The scroll offset moved.
    Scroll,
    /// The viewport changed size, so section geometry may have moved.
    Resize,
}

#[derive(Debug)]
/// Publishes which named section currently owns the scroll offset.
pub struct ActiveSectionTracker {
    sections: Vec<String>,
    activation_margin: i64,
    active: Observable<Option<String>>,
    dirty: bool,
    attached: bool,
}

impl ActiveSectionTracker {
    #[must_use]
    /// Track `sections` in navigation order, entering each `activation_margin` rows early.
    pub fn new<I, S>(sections: I, activation_margin: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            activation_margin,
            active: Observable::new(None),
            dirty: false,
            attached: true,
        }
    }

    #[must_use]
    /// Identifiers being tracked, in navigation order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    #[must_use]
    /// Rows by which each section's top is pulled up before matching.
    pub fn activation_margin(&self) -> i64 {
        self.activation_margin
    }

    /// Change the activation margin. Takes effect on the next recompute.
    pub fn set_activation_margin(&mut self, margin: i64) {
        self.activation_margin = margin;
        self.dirty = true;
    }

    #[must_use]
    /// The section currently published as active.
    pub fn active(&self) -> Option<&str> {
        self.active.value().as_deref()
    }

    #[must_use]
    /// Position of the active section in navigation order.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active()?;
        self.sections.iter().position(|id| id == active)
    }

    /// Find the section owning `offset` under the current geometry, without publishing it.
    ///
    /// Sections the provider cannot resolve are skipped.
    pub fn resolve<G>(&self, offset: i64, geometry: &G) -> Option<&str>
    where
        G: GeometryProvider + ?Sized,
    {
        self.sections
            .iter()
            .find(|id| {
                geometry.bounds(id).is_some_and(|bounds| {
                    bounds
                        .activation_interval(self.activation_margin)
                        .contains(offset)
                })
            })
            .map(String::as_str)
    }

    /// Re-evaluate every interval against `offset` and publish the result.
    ///
    /// Does nothing once the tracker has been detached.
    pub fn recompute<G>(&mut self, offset: i64, geometry: &G) -> Option<&str>
    where
        G: GeometryProvider + ?Sized,
    {
        self.dirty = false;
        if self.attached {
            let next = self.resolve(offset, geometry).map(str::to_string);
            let previous = self.active.get();
            if self.active.set(next) {
                tracing::debug!(
                    offset,
                    from = previous.as_deref().unwrap_or("-"),
                    to = self.active().unwrap_or("-"),
                    "active section changed"
                );
            }
        }
        self.active()
    }

    /// Establish the initial state from the geometry present when the page first shows.
    pub fn mount<G>(&mut self, offset: i64, geometry: &G) -> Option<&str>
    where
        G: GeometryProvider + ?Sized,
    {
        self.attached = true;
        self.recompute(offset, geometry)
    }

    /// React to an event by recomputing straight away.
    pub fn handle<G>(&mut self, event: TrackerEvent, offset: i64, geometry: &G) -> Option<&str>
    where
        G: GeometryProvider + ?Sized,
    {
        tracing::trace!(?event, offset, "tracker event");
        self.recompute(offset, geometry)
    }

    /// Record that an event happened; the recompute waits for the next [`flush`](Self::flush).
    pub fn notify(&mut self, event: TrackerEvent) {
        if self.attached {
            tracing::trace!(?event, "tracker marked dirty");
            self.dirty = true;
        }
    }

    #[must_use]
    /// Whether events arrived since the last recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recompute once if any events arrived since the last recompute.
    ///
    /// Returns whether a recompute ran.
    pub fn flush<G>(&mut self, offset: i64, geometry: &G) -> bool
    where
        G: GeometryProvider + ?Sized,
    {
        if !self.dirty {
            return false;
        }
        self.recompute(offset, geometry);
        true
    }

    /// Listen for changes to the active section.
    pub fn subscribe(&mut self, callback: impl FnMut(&Option<String>) + 'static) -> SubscriptionId {
        self.active.subscribe(callback)
    }

    /// Stop a listener registered with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.active.unsubscribe(id)
    }

    /// Tear down: drop all listeners and ignore any further events.
    pub fn detach(&mut self) {
        self.attached = false;
        self.dirty = false;
        self.active.clear_subscribers();
    }

    #[must_use]
    /// Whether the tracker still reacts to events.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
