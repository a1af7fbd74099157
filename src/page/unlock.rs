use crate::constants::UNLOCK_THRESHOLD_RATIO;

/// Swipe-to-unlock intro: a handle dragged along a horizontal track.
#[derive(Debug, Clone)]
pub struct SwipeUnlock {
    track_width: f32,
    origin_x: Option<f32>,
    progress: f32,
    unlocked: bool,
}

impl SwipeUnlock {
    pub fn new(track_width: f32) -> Self {
        Self {
            track_width: track_width.max(1.0),
            origin_x: None,
            progress: 0.0,
            unlocked: false,
        }
    }

    pub fn press(&mut self, x: f32) {
        if !self.unlocked {
            self.origin_x = Some(x);
        }
    }

    /// Updates the handle. Unlocks as soon as the threshold is reached.
    pub fn drag(&mut self, x: f32) {
        let Some(origin) = self.origin_x else {
            return;
        };
        self.progress = ((x - origin) / self.track_width).clamp(0.0, 1.0);
        if self.progress >= UNLOCK_THRESHOLD_RATIO {
            self.unlocked = true;
            self.progress = 1.0;
            self.origin_x = None;
        }
    }

    /// Releasing short of the threshold snaps the handle back.
    pub fn release(&mut self) {
        self.origin_x = None;
        if !self.unlocked {
            self.progress = 0.0;
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_dragging(&self) -> bool {
        self.origin_x.is_some()
    }
}
