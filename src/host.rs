//! The page boundary a carousel writes into.

use maud::html;

use crate::layout::Placement;
use crate::slide::Slide;

/// Elements a carousel renders into. The track is required; everything else
/// is optional and silently skipped when absent.
pub trait Host {
    fn has_track(&self) -> bool;

    fn has_indicators(&self) -> bool;

    /// Replaces the track contents with one item per slide.
    fn render_track(&mut self, slides: &[Slide], placements: &[Placement], x_unit: &str);

    /// Replaces the indicator row with `count` buttons.
    fn render_indicators(&mut self, count: usize);

    /// Moves the active markers and per-slide placement without rebuilding.
    fn mark_active(&mut self, active: usize, placements: &[Placement]);
}

#[derive(Debug, Clone)]
struct TrackItem {
    src: String,
    alt: String,
    placement: Placement,
}

/// Host that keeps an HTML rendition of the track and indicator row, using
/// the `orbit__*` class names and `is-front` / `is-active` state classes.
#[derive(Debug, Clone)]
pub struct MarkupHost {
    track: Option<Vec<TrackItem>>,
    indicators: Option<usize>,
    x_unit: String,
    active: usize,
}

impl MarkupHost {
    /// A host whose track and indicator row both exist.
    pub fn new() -> Self {
        Self::with_elements(true, true)
    }

    pub fn with_elements(track: bool, indicators: bool) -> Self {
        Self {
            track: track.then(Vec::new),
            indicators: indicators.then_some(0),
            x_unit: "%".to_string(),
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn track_len(&self) -> usize {
        self.track.as_ref().map_or(0, Vec::len)
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.unwrap_or(0)
    }

    pub fn track_html(&self) -> String {
        let Some(items) = &self.track else {
            return String::new();
        };
        let count = items.len();
        html! {
            @for (i, item) in items.iter().enumerate() {
                @let p = &item.placement;
                figure.orbit__item.is-front[p.is_active] style=(format!(
                    "--i:{i};--count:{count};transform:translateX({:.2}{}) translateZ({:.2}px) rotateY({:.2}deg);z-index:{}",
                    p.translate_x, self.x_unit, p.translate_z, p.rotate_y_deg, p.z_index
                )) {
                    div.orbit__card {
                        img.orbit__img src=(item.src) alt=(item.alt) loading="lazy";
                    }
                }
            }
        }
        .into_string()
    }

    pub fn indicators_html(&self) -> String {
        html! {
            @for i in 0..self.indicator_count() {
                button.orbit__dot.is-active[i == self.active]
                    data-i=(i)
                    aria-label=(format!("Go to slide {}", i + 1)) {}
            }
        }
        .into_string()
    }
}

impl Default for MarkupHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MarkupHost {
    fn has_track(&self) -> bool {
        self.track.is_some()
    }

    fn has_indicators(&self) -> bool {
        self.indicators.is_some()
    }

    fn render_track(&mut self, slides: &[Slide], placements: &[Placement], x_unit: &str) {
        let Some(track) = self.track.as_mut() else {
            return;
        };
        *track = slides
            .iter()
            .zip(placements)
            .map(|(slide, placement)| TrackItem {
                src: slide.src().to_string(),
                alt: slide.alt().to_string(),
                placement: *placement,
            })
            .collect();
        self.x_unit = x_unit.to_string();
    }

    fn render_indicators(&mut self, count: usize) {
        if let Some(indicators) = self.indicators.as_mut() {
            *indicators = count;
        }
    }

    fn mark_active(&mut self, active: usize, placements: &[Placement]) {
        self.active = active;
        if let Some(track) = self.track.as_mut() {
            for (item, placement) in track.iter_mut().zip(placements) {
                item.placement = *placement;
            }
        }
    }
}
