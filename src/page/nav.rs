use crate::carousel::Key;

/// Collapsible site navigation driven by a burger button.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
    height_px: f32,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Class list for the nav element.
    pub fn class(&self) -> &'static str {
        if self.open { "nav is-open" } else { "nav" }
    }

    /// Value for the burger's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// A menu link was followed.
    pub fn link_clicked(&mut self) {
        self.close();
    }

    /// Returns true when the key closed the menu.
    pub fn key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.open {
            self.close();
            return true;
        }
        false
    }

    /// Records the rendered nav height after a resize.
    pub fn resized(&mut self, height_px: f32) {
        self.height_px = height_px.max(0.0);
    }

    /// Custom property declaration used to place the dropdown below the bar.
    pub fn height_property(&self) -> String {
        format!("--nav-h: {}px", self.height_px.round())
    }
}
