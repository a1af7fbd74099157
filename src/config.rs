use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::error::Result;
use crate::slide::SlideSource;

/// Positional rendering strategy for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Side-by-side track, one active slide in front.
    #[default]
    Flat,
    /// Slides arranged on a rotating 3D ring.
    Ring,
}

/// Selectors naming the host elements a carousel writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSelectors {
    #[serde(default = "default_track")]
    pub track: String,
    #[serde(default = "default_indicators")]
    pub indicators: String,
    #[serde(default = "default_prev")]
    pub prev: String,
    #[serde(default = "default_next")]
    pub next: String,
}

impl Default for HostSelectors {
    fn default() -> Self {
        Self {
            track: default_track(),
            indicators: default_indicators(),
            prev: default_prev(),
            next: default_next(),
        }
    }
}

/// Per-carousel configuration.
///
/// Numeric fields are stored as authored and sanitized on read, so a
/// malformed value (negative interval, NaN threshold) degrades to a default
/// instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Whether autoplay may run at all
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Autoplay period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: i64,
    /// Minimum horizontal travel for a swipe, in pixels
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f32,
    #[serde(default)]
    pub mode: PresentationMode,
    /// Ring radius in pixels (ring mode only)
    #[serde(default = "default_ring_radius")]
    pub ring_radius_px: f32,
    /// Navigation lock after each ring transition, in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: i64,
    /// Arrow keys navigate when the carousel has page focus
    #[serde(default = "default_true")]
    pub keyboard: bool,
    #[serde(default)]
    pub selectors: HostSelectors,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_true(),
            interval_ms: default_interval_ms(),
            swipe_threshold_px: default_swipe_threshold(),
            mode: PresentationMode::default(),
            ring_radius_px: default_ring_radius(),
            transition_ms: default_transition_ms(),
            keyboard: default_true(),
            selectors: HostSelectors::default(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> u64 {
        if self.interval_ms <= 0 {
            DEFAULT_INTERVAL_MS
        } else {
            (self.interval_ms as u64).max(MIN_INTERVAL_MS)
        }
    }

    pub fn swipe_threshold(&self) -> f32 {
        if self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0 {
            self.swipe_threshold_px
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX
        }
    }

    pub fn ring_radius(&self) -> f32 {
        if self.ring_radius_px.is_finite() && self.ring_radius_px > 0.0 {
            self.ring_radius_px
        } else {
            DEFAULT_RING_RADIUS_PX
        }
    }

    /// Lock duration after a ring transition; always zero in flat mode.
    pub fn transition(&self) -> u64 {
        match self.mode {
            PresentationMode::Flat => 0,
            PresentationMode::Ring if self.transition_ms < 0 => DEFAULT_TRANSITION_MS,
            PresentationMode::Ring => self.transition_ms as u64,
        }
    }
}

/// Top-level configuration file for the `orbit` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    /// Slides authored inline; takes precedence over an image directory
    #[serde(default)]
    pub slides: Vec<SlideSource>,
    /// Treat the environment as preferring reduced motion
    #[serde(default)]
    pub reduced_motion: bool,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> i64 {
    DEFAULT_INTERVAL_MS as i64
}

fn default_swipe_threshold() -> f32 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_ring_radius() -> f32 {
    DEFAULT_RING_RADIUS_PX
}

fn default_transition_ms() -> i64 {
    DEFAULT_TRANSITION_MS as i64
}

fn default_track() -> String {
    "#orbitTrack".to_string()
}

fn default_indicators() -> String {
    "#orbitDots".to_string()
}

fn default_prev() -> String {
    "#orbitPrev".to_string()
}

fn default_next() -> String {
    "#orbitNext".to_string()
}
