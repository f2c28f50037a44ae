//! The visible window onto the laid-out page.
//!
//! Holds the scroll offset and keeps it inside `[0, content_height - height]`. Instant scrolling
//! (arrow keys, mouse wheel) cancels any glide in progress; smooth scrolling replaces it.

use crate::scroll::{Scroller, SmoothScroll};

#[derive(Clone, Debug)]
/// Scroll position and size of the visible region.
pub struct Viewport {
    offset: i64,
    height: i64,
    content_height: i64,
    frames: u32,
    animation: Option<SmoothScroll>,
}

impl Viewport {
    #[must_use]
    /// A viewport of `height` rows over `content_height` rows, gliding over `frames` frames.
    pub fn new(height: i64, content_height: i64, frames: u32) -> Self {
        Self {
            offset: 0,
            height: height.max(0),
            content_height: content_height.max(0),
            frames,
            animation: None,
        }
    }

    #[must_use]
    /// Row of the document shown at the top of the viewport.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    #[must_use]
    /// Visible rows.
    pub fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    /// Total rows of the document.
    pub fn content_height(&self) -> i64 {
        self.content_height
    }

    #[must_use]
    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> i64 {
        (self.content_height - self.height).max(0)
    }

    #[must_use]
    /// Whether a smooth scroll is still in progress.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    /// Where the in-flight glide will end, if any.
    pub fn animation_target(&self) -> Option<i64> {
        self.animation.map(|a| a.target())
    }

    /// Jump to `offset` (clamped) at once. Returns whether the offset moved.
    pub fn set_offset(&mut self, offset: i64) -> bool {
        self.animation = None;
        self.place(offset)
    }

    /// Move by `delta` rows at once. Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        self.set_offset(self.offset.saturating_add(delta))
    }

    /// Adopt new dimensions, clamping the offset into the new range.
    ///
    /// Returns whether the offset had to move.
    pub fn resize(&mut self, height: i64, content_height: i64) -> bool {
        self.height = height.max(0);
        self.content_height = content_height.max(0);
        if let Some(animation) = self.animation {
            let target = animation.target().clamp(0, self.max_offset());
            self.animation = Some(SmoothScroll::new(self.offset, target, self.frames));
        }
        self.place(self.offset)
    }

    /// Advance the glide by one frame. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(mut animation) = self.animation else {
            return false;
        };
        let next = animation.step();
        self.animation = if animation.is_finished() {
            None
        } else {
            Some(animation)
        };
        self.place(next)
    }

    fn place(&mut self, offset: i64) -> bool {
        let clamped = offset.clamp(0, self.max_offset());
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }
}

impl Scroller for Viewport {
    fn scroll_smooth(&mut self, target: i64) {
        let target = target.clamp(0, self.max_offset());
        self.animation = if target == self.offset {
            None
        } else {
            Some(SmoothScroll::new(self.offset, target, self.frames))
        };
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
