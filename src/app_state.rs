//! The state bridging the laid-out page, the viewport and the navigation bar.
//!
//! Input handlers only ever move the viewport or resize things; they tell the tracker an event
//! happened and leave it at that. Once per frame [`AppState::frame`] advances any smooth scroll,
//! flushes the tracker against the settled offset, and checks for newly revealed sections, so a
//! burst of wheel events costs a single recompute.

use crate::config::Config;
use crate::input::Document;
use crate::page::Page;
use crate::reveal::RevealTracker;
use crate::scroll::{self, Scroller};
use crate::tracker::{ActiveSectionTracker, TrackerEvent};
use crate::viewport::Viewport;

/// Rows taken by the navigation bar.
pub const NAV_HEIGHT: u16 = 3;
/// Rows taken by the status bar.
pub const STATUS_HEIGHT: u16 = 1;
/// Columns of padding either side of the page text.
pub const SIDE_PADDING: u16 = 1;

/// Single source of truth for what is on screen.
pub struct AppState {
    /// The document laid out at the current width.
    pub page: Page,
    /// Visible window onto the page.
    pub viewport: Viewport,
    /// Publishes the section the navigation bar highlights.
    pub tracker: ActiveSectionTracker,
    /// Sections that have scrolled into view at least once.
    pub reveal: RevealTracker,
    /// Whether the compact navigation menu is expanded.
    pub menu_open: bool,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    width: u16,
    height: u16,
    condensed_after: i64,
    menu_breakpoint: u16,
    wrap_width: usize,
}

impl AppState {
    #[must_use]
    /// Lay `document` out for a `width` x `height` terminal and mount the trackers.
    pub fn new(document: Document, cfg: &Config, width: u16, height: u16) -> Self {
        let ids = document.section_ids();
        let page = Page::new(document, page_width(width, cfg.wrap_width));
        let viewport = Viewport::new(content_height(height), page.height(), cfg.scroll_frames);
        let mut tracker = ActiveSectionTracker::new(ids.iter().cloned(), cfg.activation_margin);
        tracker.mount(viewport.offset(), &page);
        let mut reveal = RevealTracker::new(ids, cfg.reveal_threshold, cfg.reveal_margin);
        reveal.update(viewport.offset(), viewport.height(), &page);

        Self {
            page,
            viewport,
            tracker,
            reveal,
            menu_open: false,
            message: None,
            width,
            height,
            condensed_after: cfg.condensed_after,
            menu_breakpoint: cfg.menu_breakpoint,
            wrap_width: cfg.wrap_width,
        }
    }

    #[must_use]
    /// Terminal width.
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    /// Terminal height.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Re-lay the page out for a new terminal size.
    ///
    /// Section heights change with the wrap width, so the tracker is told even though the scroll
    /// offset may not have moved.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.page.relayout(page_width(width, self.wrap_width));
        self.viewport
            .resize(content_height(height), self.page.height());
        if !self.is_compact() {
            self.menu_open = false;
        }
        self.tracker.notify(TrackerEvent::Resize);
    }

    /// Scroll by `delta` rows immediately.
    pub fn scroll_by(&mut self, delta: i64) {
        if self.viewport.scroll_by(delta) {
            self.tracker.notify(TrackerEvent::Scroll);
        }
    }

    /// Scroll one screen down.
    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport.height().max(1));
    }

    /// Scroll one screen up.
    pub fn page_up(&mut self) {
        self.scroll_by(-self.viewport.height().max(1));
    }

    /// Jump to the top of the page.
    pub fn scroll_home(&mut self) {
        if self.viewport.set_offset(0) {
            self.tracker.notify(TrackerEvent::Scroll);
        }
    }

    /// Jump to the bottom of the page.
    pub fn scroll_end(&mut self) {
        if self.viewport.set_offset(self.viewport.max_offset()) {
            self.tracker.notify(TrackerEvent::Scroll);
        }
    }

    /// Smooth-scroll to section `id` and close the menu.
    pub fn scroll_to(&mut self, id: &str) {
        scroll::scroll_to(id, &self.page, &mut self.viewport);
        self.menu_open = false;
    }

    /// Smooth-scroll to the section at `index` in navigation order.
    pub fn scroll_to_index(&mut self, index: usize) {
        if let Some(id) = self.page.sections().get(index).map(|s| s.id.clone()) {
            self.scroll_to(&id);
        }
    }

    /// Smooth-scroll to the section after the highlighted one.
    pub fn next_section(&mut self) {
        let next = self.tracker.active_index().map_or(0, |i| i + 1);
        if next < self.page.sections().len() {
            self.scroll_to_index(next);
        }
    }

    /// Smooth-scroll to the section before the highlighted one.
    pub fn prev_section(&mut self) {
        match self.tracker.active_index() {
            Some(0) | None => {
                self.viewport.scroll_smooth(0);
                self.menu_open = false;
            }
            Some(i) => self.scroll_to_index(i - 1),
        }
    }

    /// Advance one frame: step the glide, recompute the active section, check reveals.
    ///
    /// Returns whether anything visible may have changed.
    pub fn frame(&mut self) -> bool {
        let moved = self.viewport.tick();
        if moved {
            self.tracker.notify(TrackerEvent::Scroll);
        }
        let recomputed = self.tracker.flush(self.viewport.offset(), &self.page);
        let revealed = self
            .reveal
            .update(self.viewport.offset(), self.viewport.height(), &self.page);
        moved || recomputed || !revealed.is_empty()
    }

    #[must_use]
    /// Whether a smooth scroll is still running and frames should keep coming.
    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    #[must_use]
    /// Whether the page has scrolled far enough for the condensed navigation style.
    pub fn is_condensed(&self) -> bool {
        self.viewport.offset() > self.condensed_after
    }

    #[must_use]
    /// Whether the terminal is too narrow for the full navigation bar.
    pub fn is_compact(&self) -> bool {
        self.width < self.menu_breakpoint
    }

    /// Open or close the compact navigation menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = self.is_compact() && !self.menu_open;
    }

    #[must_use]
    /// How far down the page the viewport is, as a whole percentage.
    pub fn scroll_percent(&self) -> u16 {
        let max = self.viewport.max_offset();
        if max == 0 {
            return 100;
        }
        let percent = self.viewport.offset().saturating_mul(100) / max;
        u16::try_from(percent.clamp(0, 100)).unwrap_or(100)
    }

    /// Tear the trackers down at the end of the session.
    pub fn close(&mut self) {
        self.tracker.detach();
    }
}

/// Rows available for page content in a terminal `height` rows tall.
#[must_use]
pub fn content_height(height: u16) -> i64 {
    i64::from(height.saturating_sub(NAV_HEIGHT + STATUS_HEIGHT))
}

/// Columns page text is wrapped at in a terminal `width` columns wide.
#[must_use]
pub fn page_width(width: u16, wrap_width: usize) -> usize {
    usize::from(width.saturating_sub(SIDE_PADDING * 2)).min(wrap_width)
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
