use crate::constants::{PARALLAX_X_PX, PARALLAX_Y_PX};
use crate::gesture::Point;

/// Axis-aligned rectangle in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Subtle hero-media shift that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    offset: (f32, f32),
}

impl Parallax {
    /// Pointer moved over `hero`. Centre maps to no shift, edges to the
    /// configured maximum.
    pub fn pointer_moved(&mut self, hero: Rect, at: Point) {
        if hero.width <= 0.0 || hero.height <= 0.0 {
            return;
        }
        let px = (at.x - hero.x) / hero.width - 0.5;
        let py = (at.y - hero.y) / hero.height - 0.5;
        self.offset = (px * PARALLAX_X_PX, py * PARALLAX_Y_PX);
    }

    pub fn pointer_left(&mut self) {
        self.offset = (0.0, 0.0);
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.offset.0, self.offset.1)
    }
}
