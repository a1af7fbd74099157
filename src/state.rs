/// Transition state of a carousel's presentation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,                        // Ready for the next navigation
    Animating { until_ms: u64 }, // Ring is rotating; navigation is dropped
    Disposed,                    // Torn down, all input ignored
}

impl TransitionState {
    pub fn is_animating(&self, now_ms: u64) -> bool {
        matches!(*self, TransitionState::Animating { until_ms } if now_ms < until_ms)
    }
}

/// Independent conditions that must all hold for autoplay to be armed.
///
/// Each input (visibility observer, hover, focus, an active drag) flips only
/// its own flag; the timer is derived from the conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackGates {
    pub requested: bool,
    pub in_viewport: bool,
    pub hovered: bool,
    pub focused: bool,
    pub dragging: bool,
}

impl Default for PlaybackGates {
    fn default() -> Self {
        Self {
            requested: false,
            in_viewport: true,
            hovered: false,
            focused: false,
            dragging: false,
        }
    }
}

impl PlaybackGates {
    pub fn open(&self) -> bool {
        self.requested && self.in_viewport && !self.hovered && !self.focused && !self.dragging
    }
}
