/// Pointer position in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction a completed swipe navigates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Drag to the right
    Previous,
    /// Drag to the left
    Next,
}

/// Classifies a displacement. Horizontal travel must exceed both the
/// threshold and the vertical travel, so page scrolling never navigates.
pub fn classify(dx: f32, dy: f32, threshold: f32) -> Option<Swipe> {
    if dx.abs() > dy.abs() && dx.abs() > threshold {
        Some(if dx > 0.0 { Swipe::Previous } else { Swipe::Next })
    } else {
        None
    }
}

/// Tracks one pointer gesture from down to up.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<Point>,
    current: Option<Point>,
}

impl DragTracker {
    pub fn begin(&mut self, at: Point) {
        self.origin = Some(at);
        self.current = Some(at);
    }

    pub fn moved(&mut self, to: Point) {
        if self.origin.is_some() {
            self.current = Some(to);
        }
    }

    /// Ends the gesture and returns the swipe it amounts to, if any.
    pub fn finish(&mut self, at: Point, threshold: f32) -> Option<Swipe> {
        let origin = self.origin.take()?;
        self.current = None;
        classify(at.x - origin.x, at.y - origin.y, threshold)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Horizontal travel so far, for live drag feedback.
    pub fn offset_x(&self) -> f32 {
        match (self.origin, self.current) {
            (Some(o), Some(c)) => c.x - o.x,
            _ => 0.0,
        }
    }
}
