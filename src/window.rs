use std::path::Path;

use raylib::prelude::*;
use tracing::{info, warn};

use orbit::carousel::{Carousel, Control, Key};
use orbit::gesture::Point;
use orbit::host::Host;
use orbit::layout::Placement;
use orbit::page::{LazyLoader, NavMenu, Parallax, Rect};
use orbit::slide::Slide;

use crate::texture_loader::load_slide_texture;

const PERSPECTIVE_PX: f32 = 1200.0; // Viewer distance used to scale ring depth
const PRELOAD_RADIUS: i64 = 2;       // Slides either side of the active one to load
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;
const BUTTON_SIZE: f32 = 48.0;

/// Immediate-mode host: remembers what the carousel rendered so the frame
/// can be drawn from it.
#[derive(Debug, Default)]
pub struct FrameHost {
    indicators: usize,
    active: usize,
    placements: Vec<Placement>,
    percent_x: bool,
}

impl Host for FrameHost {
    fn has_track(&self) -> bool {
        true
    }

    fn has_indicators(&self) -> bool {
        true
    }

    fn render_track(&mut self, _slides: &[Slide], placements: &[Placement], x_unit: &str) {
        self.placements = placements.to_vec();
        self.percent_x = x_unit == "%";
    }

    fn render_indicators(&mut self, count: usize) {
        self.indicators = count;
    }

    fn mark_active(&mut self, active: usize, placements: &[Placement]) {
        self.active = active;
        self.placements = placements.to_vec();
    }
}

/// Screen regions for one frame.
struct Regions {
    viewport: Rect,
    prev: Rect,
    next: Rect,
    dots: Vec<Rect>,
}

impl Regions {
    fn compute(width: f32, height: f32, dots: usize) -> Self {
        let viewport = Rect::new(width * 0.1, height * 0.1, width * 0.8, height * 0.72);
        let mid_y = viewport.y + viewport.height / 2.0 - BUTTON_SIZE / 2.0;
        let prev = Rect::new(viewport.x - BUTTON_SIZE - 8.0, mid_y, BUTTON_SIZE, BUTTON_SIZE);
        let next = Rect::new(viewport.x + viewport.width + 8.0, mid_y, BUTTON_SIZE, BUTTON_SIZE);

        let row_width = dots as f32 * DOT_SPACING;
        let row_x = width / 2.0 - row_width / 2.0;
        let row_y = viewport.y + viewport.height + 24.0;
        let dots = (0..dots)
            .map(|i| Rect::new(row_x + i as f32 * DOT_SPACING, row_y, DOT_SPACING, DOT_SPACING))
            .collect();

        Self { viewport, prev, next, dots }
    }

    fn control_at(&self, p: Point) -> Option<Control> {
        if self.prev.contains(p) {
            return Some(Control::Previous);
        }
        if self.next.contains(p) {
            return Some(Control::Next);
        }
        self.dots.iter().position(|r| r.contains(p)).map(Control::Indicator)
    }
}

fn to_rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.width, r.height)
}

fn now_ms(rl: &RaylibHandle) -> u64 {
    (rl.get_time() * 1000.0) as u64
}

/// Runs the carousel in a window until it is closed.
pub fn run(rl: &mut RaylibHandle, thread: &RaylibThread, mut carousel: Carousel, mut frame: FrameHost) {
    let mut textures: Vec<Option<Texture2D>> = (0..carousel.len()).map(|_| None).collect();
    let mut lazy = LazyLoader::new();
    let mut parallax = Parallax::default();
    let mut help = NavMenu::default();

    // Escape closes the help overlay instead of the window.
    rl.set_exit_key(None);

    while !rl.window_should_close() {
        let now = now_ms(rl);
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let regions = Regions::compute(width, height, frame.indicators);

        // --- Gates ---
        carousel.set_in_viewport(!rl.is_window_minimized(), now);

        let mouse = rl.get_mouse_position();
        let pointer = Point::new(mouse.x, mouse.y);
        let over = rl.is_cursor_on_screen() && regions.viewport.contains(pointer);
        carousel.set_hovered(over, now);
        if over {
            parallax.pointer_moved(regions.viewport, pointer);
        } else {
            parallax.pointer_left();
        }

        // --- Pointer ---
        let mut moved = false;
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match regions.control_at(pointer) {
                Some(control) => moved |= carousel.activate(control, now),
                None if over => carousel.pointer_down(pointer, now),
                None => {}
            }
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            carousel.pointer_move(pointer);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            moved |= carousel.pointer_up(pointer, now);
        }

        // --- Keyboard ---
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            moved |= carousel.key(Key::ArrowLeft, now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            moved |= carousel.key(Key::ArrowRight, now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_H) {
            help.toggle();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            help.key(Key::Escape);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            if carousel.gates().requested {
                carousel.stop_autoplay();
                info!("autoplay stopped");
            } else {
                carousel.start_autoplay(now);
                info!("autoplay requested");
            }
        }

        moved |= carousel.tick(now);
        if moved {
            carousel.refresh(&mut frame);
        }

        // --- Lazy texture loading around the active slide ---
        for placement in frame.placements.iter().filter(|p| p.offset.abs() <= PRELOAD_RADIUS) {
            if lazy.visible(&placement.index) {
                let slide = &carousel.slides()[placement.index];
                match load_slide_texture(rl, thread, Path::new(slide.src())) {
                    Ok(texture) => textures[placement.index] = Some(texture),
                    Err(e) => warn!(src = slide.src(), error = %e, "slide image not loaded"),
                }
            }
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::new(14, 16, 22, 255));

        draw_slides(&mut d, &carousel, &frame, &textures, &regions, parallax.offset(), now);
        draw_controls(&mut d, &frame, &regions);

        if help.is_open() {
            draw_help(&mut d, &carousel, width);
        }
    }

    carousel.dispose();
}

fn draw_slides(
    d: &mut RaylibDrawHandle,
    carousel: &Carousel,
    frame: &FrameHost,
    textures: &[Option<Texture2D>],
    regions: &Regions,
    shift: (f32, f32),
    now: u64,
) {
    let vp = regions.viewport;
    let card_h = vp.height * 0.86;
    let card_w = card_h * 4.0 / 3.0;
    let center_x = vp.x + vp.width / 2.0 + shift.0 + carousel.drag_offset();
    let center_y = vp.y + vp.height / 2.0 + shift.1;

    let mut order: Vec<&Placement> = frame.placements.iter().collect();
    order.sort_by_key(|p| p.z_index);

    for p in order {
        if frame.percent_x && p.offset.abs() > 1 {
            continue;
        }
        let lateral = if frame.percent_x { p.translate_x / 100.0 * card_w } else { p.translate_x };
        let scale = PERSPECTIVE_PX / (PERSPECTIVE_PX - p.translate_z);
        let turn = p.rotate_y_deg.to_radians().cos().abs().max(0.15);
        let w = card_w * scale * turn;
        let h = card_h * scale;
        let dest = Rectangle::new(center_x + lateral * scale - w / 2.0, center_y - h / 2.0, w, h);

        let shade = if p.is_active { 255 } else { 150 };
        let tint = Color::new(shade, shade, shade, 255);

        match &textures[p.index] {
            Some(texture) => {
                let src = Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
                d.draw_texture_pro(texture, src, dest, Vector2::new(0.0, 0.0), 0.0, tint);
            }
            None => {
                d.draw_rectangle_rec(dest, Color::new(40, 44, 56, 255));
                let alt = carousel.slides()[p.index].alt();
                d.draw_text(alt, dest.x as i32 + 12, dest.y as i32 + 12, 18, Color::LIGHTGRAY);
            }
        }
        if p.is_active && carousel.is_animating(now) {
            d.draw_rectangle_lines_ex(dest, 2.0, Color::new(255, 255, 255, 90));
        }
    }
}

fn draw_controls(d: &mut RaylibDrawHandle, frame: &FrameHost, regions: &Regions) {
    if frame.placements.len() > 1 {
        for (rect, label) in [(regions.prev, "<"), (regions.next, ">")] {
            d.draw_rectangle_rec(to_rectangle(rect), Color::new(255, 255, 255, 40));
            d.draw_text(label, (rect.x + 17.0) as i32, (rect.y + 10.0) as i32, 30, Color::WHITE);
        }
    }
    for (i, rect) in regions.dots.iter().enumerate() {
        let cx = (rect.x + rect.width / 2.0) as i32;
        let cy = (rect.y + rect.height / 2.0) as i32;
        if i == frame.active {
            d.draw_circle(cx, cy, DOT_RADIUS, Color::WHITE);
        } else {
            d.draw_circle_lines(cx, cy, DOT_RADIUS, Color::GRAY);
        }
    }
}

fn draw_help(d: &mut RaylibDrawHandle, carousel: &Carousel, width: f32) {
    let panel = Rectangle::new(width - 360.0, 16.0, 344.0, 150.0);
    d.draw_rectangle_rec(panel, Color::new(0, 0, 0, 200));
    let caption = carousel.active_slide().map_or("", |s| s.alt());
    let lines = [
        format!("slide {}/{}", carousel.active_index() + 1, carousel.len()),
        caption.to_string(),
        format!("autoplay: {}", if carousel.is_autoplaying() { "on" } else { "paused" }),
        "<- -> navigate   P autoplay".to_string(),
        "drag to swipe    Esc close".to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, panel.x as i32 + 12, panel.y as i32 + 12 + i as i32 * 26, 18, Color::RAYWHITE);
    }
}
