//! Positional strategies for carousel slides.
//!
//! Navigation, autoplay and gestures live in the carousel; a layout only
//! decides where each slide sits relative to the active one.

mod flat;
mod ring;

pub use flat::FlatLayout;
pub use ring::RingLayout;

use crate::config::{CarouselConfig, PresentationMode};

/// Where one slide is drawn for a given active index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    /// Signed shortest distance from the active slide
    pub offset: i64,
    /// Lateral shift in pixels (ring) or percent of slide width (flat)
    pub translate_x: f32,
    /// Depth in pixels, zero or negative
    pub translate_z: f32,
    pub rotate_y_deg: f32,
    pub z_index: i32,
    pub is_active: bool,
}

pub trait Layout: std::fmt::Debug {
    fn place(&self, index: usize, active: usize, count: usize) -> Placement;

    /// CSS unit used for `translate_x`.
    fn x_unit(&self) -> &'static str;

    fn place_all(&self, active: usize, count: usize) -> Vec<Placement> {
        (0..count).map(|i| self.place(i, active, count)).collect()
    }
}

/// Picks the layout named by the configuration.
pub fn for_config(config: &CarouselConfig) -> Box<dyn Layout> {
    match config.mode {
        PresentationMode::Flat => Box::new(FlatLayout),
        PresentationMode::Ring => Box::new(RingLayout::new(config.ring_radius())),
    }
}

/// Signed distance from `active` to `index` going the short way round.
///
/// Ties (exactly half-way on an even ring) resolve to the positive side.
pub fn shortest_offset(index: usize, active: usize, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let n = count as i64;
    let raw = (index as i64 - active as i64).rem_euclid(n);
    if raw > n / 2 { raw - n } else { raw }
}
