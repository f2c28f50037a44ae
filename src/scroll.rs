//! Smooth-scroll navigation to a named section.
//!
//! Jumping to a section is fire-and-forget: look up where the section currently starts and ask
//! the platform to glide there. The tracker is not told anything; the scroll offsets produced by
//! the animation reach it as ordinary scroll events, so the highlight catches up as the motion
//! settles.

use crate::geometry::GeometryProvider;

/// Something that can move the visible region of the page with smoothed motion.
pub trait Scroller {
    /// Begin animating the scroll offset towards `target`.
    fn scroll_smooth(&mut self, target: i64);
}

/// Request a smooth scroll bringing section `id` to the top of the viewport.
///
/// Unknown identifiers are logged and otherwise ignored.
pub fn scroll_to<G, S>(id: &str, geometry: &G, scroller: &mut S)
where
    G: GeometryProvider + ?Sized,
    S: Scroller + ?Sized,
{
    if let Some(bounds) = geometry.bounds(id) {
        tracing::debug!(id, target = bounds.top, "smooth scroll requested");
        scroller.scroll_smooth(bounds.top);
    } else {
        tracing::warn!(id, "scroll target has no rendered section");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An in-flight glide from one offset to another, advanced one frame at a time.
pub struct SmoothScroll {
    from: i64,
    to: i64,
    frame: u32,
    frames: u32,
}

impl SmoothScroll {
    #[must_use]
    /// Glide from `from` to `to` over `frames` steps (at least one).
    pub fn new(from: i64, to: i64, frames: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            frames: frames.max(1),
        }
    }

    #[must_use]
    /// Offset the glide ends on.
    pub fn target(&self) -> i64 {
        self.to
    }

    #[must_use]
    /// Whether the final frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advance one frame and return the offset to show.
    ///
    /// The last frame always lands exactly on the target.
    pub fn step(&mut self) -> i64 {
        if self.frame < self.frames {
            self.frame += 1;
        }
        if self.is_finished() {
            return self.to;
        }
        let t = f64::from(self.frame) / f64::from(self.frames);
        interpolate(self.from, self.to, ease_in_out(t))
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn interpolate(from: i64, to: i64, progress: f64) -> i64 {
    let distance = (to - from) as f64;
    from + (distance * progress).round() as i64
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
