//! Page-level behaviors around the carousels.

mod lazy;
mod nav;
mod parallax;
mod reveal;
mod scroll_top;
mod unlock;

pub use lazy::LazyLoader;
pub use nav::NavMenu;
pub use parallax::{Parallax, Rect};
pub use reveal::{RevealObserver, TargetId};
pub use scroll_top::ScrollTop;
pub use unlock::SwipeUnlock;

use tracing::debug;

use crate::carousel::{Carousel, Environment, Key};
use crate::config::CarouselConfig;
use crate::constants::UNLOCK_TRACK_PX;
use crate::gesture::Point;
use crate::host::Host;
use crate::slide::SlideSource;

/// Everything wired on one page view: any number of independent carousels
/// plus the simple page behaviors.
#[derive(Debug)]
pub struct Page {
    env: Environment,
    carousels: Vec<Carousel>,
    keyboard_target: Option<usize>,
    pub nav: NavMenu,
    pub reveal: RevealObserver,
    pub scroll_top: ScrollTop,
    pub parallax: Parallax,
    pub unlock: SwipeUnlock,
    pub lazy: LazyLoader<String>,
}

impl Page {
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            carousels: Vec::new(),
            keyboard_target: None,
            nav: NavMenu::default(),
            reveal: RevealObserver::new(env.reduced_motion),
            scroll_top: ScrollTop::default(),
            parallax: Parallax::default(),
            unlock: SwipeUnlock::new(UNLOCK_TRACK_PX),
            lazy: LazyLoader::new(),
        }
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    /// Mounts a carousel into `host`. A host missing its elements is skipped
    /// and leaves every other carousel untouched.
    pub fn mount_carousel(
        &mut self,
        config: CarouselConfig,
        sources: Vec<SlideSource>,
        host: &mut dyn Host,
        now_ms: u64,
    ) -> Option<usize> {
        let carousel = Carousel::mount(config, sources, self.env, host, now_ms)?;
        self.carousels.push(carousel);
        let id = self.carousels.len() - 1;
        debug!(id, "carousel mounted");
        Some(id)
    }

    pub fn carousel(&self, id: usize) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn carousel_mut(&mut self, id: usize) -> Option<&mut Carousel> {
        self.carousels.get_mut(id)
    }

    pub fn carousel_count(&self) -> usize {
        self.carousels.len()
    }

    /// Chooses which carousel arrow keys drive. Without a choice the first
    /// mounted carousel gets them.
    pub fn set_keyboard_target(&mut self, id: Option<usize>) {
        self.keyboard_target = id;
    }

    /// Routes a key press: Escape closes the nav, arrows go to the keyboard
    /// target. Returns true when something changed.
    pub fn key(&mut self, key: Key, now_ms: u64) -> bool {
        if self.nav.key(key) {
            return true;
        }
        let target = self.keyboard_target.unwrap_or(0);
        match self.carousels.get_mut(target) {
            Some(carousel) => carousel.key(key, now_ms),
            None => false,
        }
    }

    /// Pointer position over the page. Inside `hero` it drives the parallax
    /// shift; anywhere else the hero settles back. Reduced motion keeps the
    /// hero still.
    pub fn hero_pointer(&mut self, hero: Rect, at: Point) {
        if !self.env.reduced_motion && hero.contains(at) {
            self.parallax.pointer_moved(hero, at);
        } else {
            self.parallax.pointer_left();
        }
    }

    pub fn hero_pointer_left(&mut self) {
        self.parallax.pointer_left();
    }

    /// Scroll input. Returns whether the scroll-to-top control is shown.
    pub fn scrolled(&mut self, offset_y: f32) -> bool {
        self.scroll_top.scrolled(offset_y);
        self.scroll_top.is_visible()
    }

    /// Scroll-to-top activation. Returns the offset to scroll to.
    pub fn scroll_to_top(&mut self) -> f32 {
        let target = self.scroll_top.activate();
        debug!(target_y = target, "scrolling to top");
        target
    }

    pub fn unlock_press(&mut self, x: f32) {
        self.unlock.press(x);
    }

    /// Returns true once the intro is unlocked.
    pub fn unlock_drag(&mut self, x: f32) -> bool {
        let was = self.unlock.is_unlocked();
        self.unlock.drag(x);
        if !was && self.unlock.is_unlocked() {
            debug!("intro unlocked");
        }
        self.unlock.is_unlocked()
    }

    pub fn unlock_release(&mut self) {
        self.unlock.release();
    }

    /// A lazy media element scrolled into view. Returns true the first time
    /// for `src`: the caller should start loading it.
    pub fn media_visible(&mut self, src: &str) -> bool {
        self.lazy.visible(&src.to_string())
    }

    /// Advances timers. Returns the ids of carousels that moved and the
    /// reveal targets that became visible.
    pub fn tick(&mut self, now_ms: u64) -> (Vec<usize>, Vec<TargetId>) {
        let moved = self
            .carousels
            .iter_mut()
            .enumerate()
            .filter_map(|(id, c)| c.tick(now_ms).then_some(id))
            .collect();
        (moved, self.reveal.tick(now_ms))
    }

    pub fn dispose(&mut self) {
        for carousel in &mut self.carousels {
            carousel.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MarkupHost;

    fn sources(n: usize) -> Vec<SlideSource> {
        (0..n).map(|i| SlideSource::new(format!("{i}.jpg"), "")).collect()
    }

    fn config(interval_ms: i64) -> CarouselConfig {
        CarouselConfig { interval_ms, ..Default::default() }
    }

    #[test]
    fn broken_host_does_not_block_others() {
        let mut page = Page::new(Environment::default());
        let mut missing = MarkupHost::with_elements(false, false);
        let mut ok = MarkupHost::new();

        assert_eq!(page.mount_carousel(config(1000), sources(3), &mut missing, 0), None);
        assert_eq!(page.mount_carousel(config(1000), sources(3), &mut ok, 0), Some(0));
        assert_eq!(page.carousel_count(), 1);
        assert!(page.carousel(0).unwrap().is_autoplaying());
    }

    #[test]
    fn instances_are_independent() {
        let mut page = Page::new(Environment::default());
        let mut a = MarkupHost::new();
        let mut b = MarkupHost::new();
        page.mount_carousel(config(1000), sources(3), &mut a, 0);
        page.mount_carousel(config(2500), sources(4), &mut b, 0);

        let (moved, _) = page.tick(1000);
        assert_eq!(moved, vec![0]);
        assert_eq!(page.carousel(1).unwrap().active_index(), 0);

        page.carousel_mut(1).unwrap().set_hovered(true, 1200);
        let (moved, _) = page.tick(2500);
        assert_eq!(moved, vec![0]);
        assert_eq!(page.carousel(0).unwrap().active_index(), 2);
        assert_eq!(page.carousel(1).unwrap().active_index(), 0);
    }

    #[test]
    fn escape_goes_to_nav_before_carousels() {
        let mut page = Page::new(Environment::default());
        let mut host = MarkupHost::new();
        page.mount_carousel(config(1000), sources(3), &mut host, 0);

        page.nav.toggle();
        assert!(page.key(Key::Escape, 0));
        assert!(!page.nav.is_open());

        assert!(page.key(Key::ArrowRight, 0));
        assert_eq!(page.carousel(0).unwrap().active_index(), 1);

        page.set_keyboard_target(Some(5));
        assert!(!page.key(Key::ArrowRight, 0));
    }

    #[test]
    fn tick_reports_reveals() {
        let mut page = Page::new(Environment::default());
        page.reveal.observe(3, Some("100"));
        page.reveal.intersect(3, 1.0, 0);
        let (_, revealed) = page.tick(100);
        assert_eq!(revealed, vec![3]);
    }

    #[test]
    fn dispose_stops_all_carousels() {
        let mut page = Page::new(Environment::default());
        let mut host = MarkupHost::new();
        page.mount_carousel(config(1000), sources(3), &mut host, 0);
        page.dispose();
        assert!(!page.carousel(0).unwrap().is_autoplaying());
        let (moved, _) = page.tick(5000);
        assert!(moved.is_empty());
    }

    #[test]
    fn hero_pointer_drives_parallax() {
        let mut page = Page::new(Environment::default());
        let hero = Rect::new(0.0, 0.0, 200.0, 100.0);

        page.hero_pointer(hero, Point::new(200.0 - 0.001, 50.0));
        assert!(page.parallax.offset().0 > 3.9);

        page.hero_pointer(hero, Point::new(500.0, 50.0));
        assert_eq!(page.parallax.offset(), (0.0, 0.0));

        page.hero_pointer(hero, Point::new(0.0, 0.0));
        assert_eq!(page.parallax.offset(), (-4.0, -3.0));
        page.hero_pointer_left();
        assert_eq!(page.parallax.offset(), (0.0, 0.0));
    }

    #[test]
    fn reduced_motion_keeps_hero_still() {
        let mut page = Page::new(Environment { reduced_motion: true });
        page.hero_pointer(Rect::new(0.0, 0.0, 200.0, 100.0), Point::new(0.0, 0.0));
        assert_eq!(page.parallax.offset(), (0.0, 0.0));
    }

    #[test]
    fn scroll_input_toggles_scroll_top() {
        let mut page = Page::new(Environment::default());
        assert!(!page.scrolled(100.0));
        assert!(page.scrolled(900.0));
        assert_eq!(page.scroll_to_top(), 0.0);
    }

    #[test]
    fn unlock_through_page() {
        let mut page = Page::new(Environment::default());
        page.unlock_press(0.0);
        assert!(!page.unlock_drag(100.0));
        page.unlock_release();
        assert_eq!(page.unlock.progress(), 0.0);

        page.unlock_press(0.0);
        assert!(page.unlock_drag(UNLOCK_TRACK_PX));
        page.unlock_release();
        assert!(page.unlock.is_unlocked());
    }

    #[test]
    fn media_loads_once_per_source() {
        let mut page = Page::new(Environment::default());
        assert!(page.media_visible("hero.webm"));
        assert!(!page.media_visible("hero.webm"));
        assert!(page.media_visible("team.jpg"));
        assert_eq!(page.lazy.armed_count(), 2);
    }
}
