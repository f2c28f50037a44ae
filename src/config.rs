//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there. Any
//! field left out of the file takes its default. Command line flags override both.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

const CONFIG_FILE: &str = "folio.toml";

const DEFAULT_ACTIVATION_MARGIN: i64 = 3;
const DEFAULT_CONDENSED_AFTER: i64 = 1;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_MARGIN: i64 = 1;
const DEFAULT_SCROLL_FRAMES: u32 = 12;
const DEFAULT_FRAME_MILLIS: u64 = 16;
const DEFAULT_MENU_BREAKPOINT: u16 = 80;
const DEFAULT_WRAP_WIDTH: usize = 100;

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_ACTIVATION_MARGIN)]
    /// Rows before its heading reaches the top at which a section counts as entered.
    ///
    /// Matches the height of the fixed navigation bar by default.
    pub activation_margin: i64,
    #[facet(default = DEFAULT_CONDENSED_AFTER)]
    /// Scroll offset past which the navigation bar switches to its condensed style.
    pub condensed_after: i64,
    #[facet(default = DEFAULT_REVEAL_THRESHOLD)]
    /// Fraction of a section that must be in view before it is revealed.
    pub reveal_threshold: f64,
    #[facet(default = DEFAULT_REVEAL_MARGIN)]
    /// Rows the viewport is grown by, on each edge, when checking for reveals.
    pub reveal_margin: i64,
    #[facet(default = DEFAULT_SCROLL_FRAMES)]
    /// Frames a smooth scroll takes to reach its target.
    pub scroll_frames: u32,
    #[facet(default = DEFAULT_FRAME_MILLIS)]
    /// Milliseconds between animation frames.
    pub frame_millis: u64,
    #[facet(default = DEFAULT_MENU_BREAKPOINT)]
    /// Terminal width below which navigation collapses into a toggled menu.
    pub menu_breakpoint: u16,
    #[facet(default = DEFAULT_WRAP_WIDTH)]
    /// Maximum column width page text is wrapped at.
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_margin: DEFAULT_ACTIVATION_MARGIN,
            condensed_after: DEFAULT_CONDENSED_AFTER,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_margin: DEFAULT_REVEAL_MARGIN,
            scroll_frames: DEFAULT_SCROLL_FRAMES,
            frame_millis: DEFAULT_FRAME_MILLIS,
            menu_breakpoint: DEFAULT_MENU_BREAKPOINT,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is absent or unusable.
    ///
    /// A missing file is normal and silent; anything else is logged.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "config could not be parsed, using defaults"
                );
                Self::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "config could not be read, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse TOML settings, filling in defaults for anything missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed or a field has the wrong type.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
