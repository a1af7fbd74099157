use crate::constants::SCROLL_TOP_THRESHOLD_PX;

/// Scroll-to-top control that appears once the page is scrolled far enough.
#[derive(Debug, Clone)]
pub struct ScrollTop {
    threshold: f32,
    visible: bool,
}

impl Default for ScrollTop {
    fn default() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD_PX)
    }
}

impl ScrollTop {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, visible: false }
    }

    pub fn scrolled(&mut self, offset_y: f32) {
        self.visible = offset_y > self.threshold;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Activating the control scrolls to the top.
    pub fn activate(&mut self) -> f32 {
        self.visible = false;
        0.0
    }
}
