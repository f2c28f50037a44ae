//! folio: a terminal portfolio page with scroll-tracked section navigation.
//!
//! A portfolio written as one markdown document is laid out as a scrolling page beneath a fixed
//! navigation bar. As the page scrolls, an [`ActiveSectionTracker`](tracker::ActiveSectionTracker)
//! works out which section owns the current offset and the bar highlights it; choosing an entry
//! glides the page to that section.

pub mod app_state;
pub mod config;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod input;
pub mod observable;
pub mod page;
pub mod report;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod tracker;
pub mod ui;
pub mod viewport;

pub use error::{Error, Result};
