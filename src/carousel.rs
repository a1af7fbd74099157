//! Carousel controller.
//!
//! One instance per carousel on the page. All inputs carry the current time
//! in milliseconds; the controller never reads a clock itself, so the host
//! decides what "now" is (frame time, event timestamp, or a test value).

use tracing::debug;

use crate::config::CarouselConfig;
use crate::gesture::{DragTracker, Point, Swipe};
use crate::host::Host;
use crate::layout::{self, Layout, Placement};
use crate::slide::{Slide, SlideSource, build_slides};
use crate::state::{PlaybackGates, TransitionState};
use crate::timer::AutoplayTimer;

/// Signals read from the user's environment, never written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub reduced_motion: bool,
}

/// Keys a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Clickable controls around the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
}

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    config: CarouselConfig,
    layout: Box<dyn Layout>,
    env: Environment,

    active: usize,
    timer: AutoplayTimer,
    gates: PlaybackGates,
    drag: DragTracker,
    transition: TransitionState,
}

impl Carousel {
    pub fn new(config: CarouselConfig, sources: Vec<SlideSource>, env: Environment) -> Self {
        Self {
            slides: build_slides(sources),
            layout: layout::for_config(&config),
            config,
            env,
            active: 0,
            timer: AutoplayTimer::default(),
            gates: PlaybackGates::default(),
            drag: DragTracker::default(),
            transition: TransitionState::Idle,
        }
    }

    /// Builds a carousel into `host`, renders it and starts autoplay.
    ///
    /// Returns `None` when the host has no track element to render into.
    pub fn mount(
        config: CarouselConfig,
        sources: Vec<SlideSource>,
        env: Environment,
        host: &mut dyn Host,
        now_ms: u64,
    ) -> Option<Self> {
        if !host.has_track() {
            debug!(selector = %config.selectors.track, "carousel track missing, skipping");
            return None;
        }
        let mut carousel = Self::new(config, sources, env);
        carousel.render(host);
        carousel.start_autoplay(now_ms);
        Some(carousel)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.active)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_armed()
    }

    /// When the armed autoplay timer fires next, if armed.
    pub fn next_autoplay_ms(&self) -> Option<u64> {
        self.timer.due_ms()
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.transition.is_animating(now_ms)
    }

    pub fn is_disposed(&self) -> bool {
        self.transition == TransitionState::Disposed
    }

    pub fn gates(&self) -> PlaybackGates {
        self.gates
    }

    /// Horizontal travel of the gesture in progress.
    pub fn drag_offset(&self) -> f32 {
        self.drag.offset_x()
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.layout.place_all(self.active, self.slides.len())
    }

    // --- Navigation ---

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(self.active as i64 + 1, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.navigate(self.active as i64 - 1, now_ms)
    }

    /// Jumps to `index`, wrapping any integer into range.
    pub fn go_to(&mut self, index: i64, now_ms: u64) -> bool {
        self.navigate(index, now_ms)
    }

    pub fn activate(&mut self, control: Control, now_ms: u64) -> bool {
        match control {
            Control::Previous => self.previous(now_ms),
            Control::Next => self.next(now_ms),
            Control::Indicator(i) => self.go_to(i as i64, now_ms),
        }
    }

    fn navigate(&mut self, target: i64, now_ms: u64) -> bool {
        if self.is_disposed() || self.slides.is_empty() {
            return false;
        }
        if self.transition.is_animating(now_ms) {
            debug!(requested = target, "navigation dropped while ring is turning");
            return false;
        }

        let count = self.slides.len();
        self.active = wrap_index(target, count);

        let lock = self.config.transition();
        self.transition = if lock > 0 && count > 1 {
            TransitionState::Animating { until_ms: now_ms.saturating_add(lock) }
        } else {
            TransitionState::Idle
        };

        debug!(active = self.active, count, "carousel moved");
        self.rearm(now_ms);
        true
    }

    // --- Autoplay ---

    /// Requests autoplay. Clears any armed timer and sets a fresh one when
    /// every gate allows it; calling it twice still leaves one timer.
    pub fn start_autoplay(&mut self, now_ms: u64) {
        self.gates.requested = true;
        self.rearm(now_ms);
    }

    pub fn stop_autoplay(&mut self) {
        self.gates.requested = false;
        self.timer.clear();
    }

    /// Fires the autoplay timer if it is due. Returns whether the carousel moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let TransitionState::Animating { until_ms } = self.transition {
            if now_ms >= until_ms {
                self.transition = TransitionState::Idle;
            }
        }
        if !self.timer.is_due(now_ms) {
            return false;
        }
        self.timer.clear();
        let moved = self.next(now_ms);
        if !moved {
            self.sync_timer(now_ms);
        }
        moved
    }

    fn can_autoplay(&self) -> bool {
        self.config.autoplay
            && !self.env.reduced_motion
            && self.slides.len() > 1
            && !self.is_disposed()
    }

    fn rearm(&mut self, now_ms: u64) {
        self.timer.clear();
        self.sync_timer(now_ms);
    }

    /// Arms the timer if every condition holds and it is not armed yet;
    /// clears it otherwise.
    fn sync_timer(&mut self, now_ms: u64) {
        if self.can_autoplay() && self.gates.open() {
            if !self.timer.is_armed() {
                self.timer.arm(now_ms, self.config.interval());
                debug!(due_ms = ?self.timer.due_ms(), "autoplay armed");
            }
        } else if self.timer.is_armed() {
            self.timer.clear();
            debug!(gates = ?self.gates, "autoplay paused");
        }
    }

    // --- Gates ---

    /// Visibility observer input: pauses off-screen, resumes with a full
    /// interval on re-entry.
    pub fn set_in_viewport(&mut self, visible: bool, now_ms: u64) {
        if self.gates.in_viewport != visible {
            self.gates.in_viewport = visible;
            self.sync_timer(now_ms);
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now_ms: u64) {
        if self.gates.hovered != hovered {
            self.gates.hovered = hovered;
            self.sync_timer(now_ms);
        }
    }

    pub fn set_focused(&mut self, focused: bool, now_ms: u64) {
        if self.gates.focused != focused {
            self.gates.focused = focused;
            self.sync_timer(now_ms);
        }
    }

    // --- Pointer & keyboard ---

    pub fn pointer_down(&mut self, at: Point, now_ms: u64) {
        if self.is_disposed() || self.slides.is_empty() {
            return;
        }
        self.drag.begin(at);
        self.gates.dragging = true;
        self.sync_timer(now_ms);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.drag.moved(at);
    }

    /// Ends a gesture. Navigates on a qualifying swipe; autoplay resumes
    /// either way.
    pub fn pointer_up(&mut self, at: Point, now_ms: u64) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        let swipe = self.drag.finish(at, self.config.swipe_threshold());
        self.gates.dragging = false;
        let moved = match swipe {
            Some(Swipe::Previous) => self.previous(now_ms),
            Some(Swipe::Next) => self.next(now_ms),
            None => false,
        };
        if !moved {
            self.rearm(now_ms);
        }
        moved
    }

    pub fn pointer_cancel(&mut self, now_ms: u64) {
        if self.drag.is_active() {
            self.drag.cancel();
            self.gates.dragging = false;
            self.rearm(now_ms);
        }
    }

    /// Arrow keys navigate; the caller decides whether this carousel is the
    /// page's focus context.
    pub fn key(&mut self, key: Key, now_ms: u64) -> bool {
        if !self.config.keyboard {
            return false;
        }
        match key {
            Key::ArrowLeft => self.previous(now_ms),
            Key::ArrowRight => self.next(now_ms),
            Key::Escape | Key::Other => false,
        }
    }

    // --- Rendering ---

    /// Writes the full track and indicator row, then the active markers.
    /// A single slide gets no indicators.
    pub fn render(&self, host: &mut dyn Host) {
        if !host.has_track() {
            return;
        }
        let placements = self.placements();
        host.render_track(&self.slides, &placements, self.layout.x_unit());
        if host.has_indicators() {
            let dots = if self.slides.len() > 1 { self.slides.len() } else { 0 };
            host.render_indicators(dots);
        }
        host.mark_active(self.active, &placements);
    }

    /// Updates the active markers only.
    pub fn refresh(&self, host: &mut dyn Host) {
        if host.has_track() {
            host.mark_active(self.active, &self.placements());
        }
    }

    /// Tears the carousel down: no timer, no gesture, no further input.
    pub fn dispose(&mut self) {
        self.timer.clear();
        self.drag.cancel();
        self.gates = PlaybackGates::default();
        self.transition = TransitionState::Disposed;
        debug!("carousel disposed");
    }
}

/// `((k % n) + n) % n`, for any integer `k`.
pub fn wrap_index(k: i64, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        k.rem_euclid(count as i64) as usize
    }
}
