pub const DEFAULT_INTERVAL_MS: u64 = 5000;      // Autoplay period between slides
pub const MIN_INTERVAL_MS: u64 = 250;           // Floor applied to configured intervals
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 30.0; // Horizontal travel needed for a swipe
pub const DEFAULT_TRANSITION_MS: u64 = 800;     // Ring transition cool-down
pub const DEFAULT_RING_RADIUS_PX: f32 = 420.0;  // Ring radius used for lateral/depth offsets

pub const REVEAL_THRESHOLD: f32 = 0.1;          // Intersection ratio that triggers a reveal
pub const PARALLAX_X_PX: f32 = 8.0;             // Max hero shift at the horizontal edges
pub const PARALLAX_Y_PX: f32 = 6.0;             // Max hero shift at the vertical edges
pub const UNLOCK_THRESHOLD_RATIO: f32 = 0.85;   // Share of the track a drag must cover
pub const UNLOCK_TRACK_PX: f32 = 280.0;         // Width of the swipe-to-unlock track
pub const SCROLL_TOP_THRESHOLD_PX: f32 = 600.0; // Scroll offset that reveals the control

pub const RENDER_WIDTH: i32 = 1280;             // Initial window width
pub const RENDER_HEIGHT: i32 = 720;             // Initial window height
pub const FPS: u32 = 60;                        // Frames per second
