use proptest::prelude::*;

use orbit::carousel::{Carousel, Environment};
use orbit::config::{CarouselConfig, PresentationMode};
use orbit::gesture::Point;
use orbit::host::MarkupHost;
use orbit::slide::SlideSource;

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    GoTo(i64),
    Swipe(f32, f32),
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        any::<i64>().prop_map(Op::GoTo),
        (-200.0f32..200.0, -200.0f32..200.0).prop_map(|(dx, dy)| Op::Swipe(dx, dy)),
        (0u64..10_000).prop_map(Op::Tick),
    ]
}

fn sources(n: usize) -> Vec<SlideSource> {
    (0..n).map(|i| SlideSource::new(format!("{i}.jpg"), format!("slide {i}"))).collect()
}

fn carousel(n: usize, mode: PresentationMode) -> Carousel {
    let config = CarouselConfig { mode, interval_ms: 1000, ..Default::default() };
    Carousel::new(config, sources(n), Environment::default())
}

fn mode() -> impl Strategy<Value = PresentationMode> {
    prop_oneof![Just(PresentationMode::Flat), Just(PresentationMode::Ring)]
}

proptest! {
    #[test]
    fn active_index_stays_in_range(
        n in 1usize..12,
        mode in mode(),
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut c = carousel(n, mode);
        c.start_autoplay(0);
        let mut now = 0u64;
        for op in ops {
            match op {
                Op::Next => { c.next(now); }
                Op::Previous => { c.previous(now); }
                Op::GoTo(k) => { c.go_to(k, now); }
                Op::Swipe(dx, dy) => {
                    c.pointer_down(Point::new(500.0, 500.0), now);
                    c.pointer_up(Point::new(500.0 + dx, 500.0 + dy), now);
                }
                Op::Tick(dt) => {
                    now += dt;
                    c.tick(now);
                }
            }
            prop_assert!(c.active_index() < n);
            // Never more than one pending deadline, and never one in the past
            // of the last re-arm.
            if let Some(due) = c.next_autoplay_ms() {
                prop_assert!(due <= now + 1000);
            }
        }
    }

    #[test]
    fn next_then_previous_round_trips(n in 1usize..20, start in any::<i64>()) {
        let mut c = carousel(n, PresentationMode::Flat);
        c.go_to(start, 0);
        let before = c.active_index();
        c.next(0);
        c.previous(0);
        prop_assert_eq!(c.active_index(), before);
    }

    #[test]
    fn go_to_wraps_any_integer(n in 1usize..20, k in -1_000_000i64..1_000_000) {
        let mut c = carousel(n, PresentationMode::Flat);
        c.go_to(k, 0);
        let n = n as i64;
        prop_assert_eq!(c.active_index() as i64, ((k % n) + n) % n);
    }

    #[test]
    fn repeated_starts_leave_one_timer(n in 2usize..10, starts in 1usize..8, at in 0u64..5000) {
        let mut c = carousel(n, PresentationMode::Flat);
        for _ in 0..starts {
            c.start_autoplay(at);
        }
        prop_assert_eq!(c.next_autoplay_ms(), Some(at + 1000));
        prop_assert!(!c.tick(at + 999));
        prop_assert!(c.tick(at + 1000));
        prop_assert_eq!(c.active_index(), 1);
        prop_assert!(!c.tick(at + 1500));
    }

    #[test]
    fn reduced_motion_never_advances(n in 2usize..10, elapsed in 0u64..100_000) {
        let config = CarouselConfig { interval_ms: 1000, ..Default::default() };
        let mut c = Carousel::new(config, sources(n), Environment { reduced_motion: true });
        c.start_autoplay(0);
        prop_assert!(!c.is_autoplaying());
        prop_assert!(!c.tick(elapsed));
        prop_assert_eq!(c.active_index(), 0);
    }
}

#[test]
fn swipe_scenarios_on_three_slides() {
    for (dx, expected) in [(40.0, 0), (-40.0, 2), (10.0, 1)] {
        let mut c = carousel(3, PresentationMode::Flat);
        c.go_to(1, 0);
        c.pointer_down(Point::new(100.0, 100.0), 0);
        c.pointer_up(Point::new(100.0 + dx, 100.0), 0);
        assert_eq!(c.active_index(), expected, "drag of {dx}px");
    }
}

#[test]
fn zero_slides_render_empty() {
    let mut host = MarkupHost::new();
    let mut c = Carousel::mount(CarouselConfig::default(), Vec::new(), Environment::default(), &mut host, 0)
        .expect("track exists");
    assert_eq!(host.track_len(), 0);
    assert_eq!(host.indicator_count(), 0);
    c.start_autoplay(0);
    assert!(!c.is_autoplaying());
}

#[test]
fn viewport_exit_stops_and_return_resumes_with_full_interval() {
    let mut c = carousel(4, PresentationMode::Flat);
    c.start_autoplay(0);
    assert!(c.tick(1000));

    // Leave with 700ms of the next interval elapsed.
    c.set_in_viewport(false, 1700);
    assert!(!c.is_autoplaying());
    assert!(!c.tick(2000));

    c.set_in_viewport(true, 5000);
    assert!(!c.tick(5300));
    assert!(!c.tick(5999));
    assert!(c.tick(6000));
    assert_eq!(c.active_index(), 2);
}

#[test]
fn ring_mode_renders_depth_ordered_markup() {
    let config = CarouselConfig { mode: PresentationMode::Ring, ..Default::default() };
    let mut host = MarkupHost::new();
    let c = Carousel::mount(config, sources(6), Environment::default(), &mut host, 0).unwrap();
    let placements = c.placements();
    assert!(placements[0].is_active);
    assert!(placements.iter().all(|p| p.z_index <= placements[0].z_index));
    assert!(host.track_html().contains("translateX(0.00px)"));
    assert_eq!(host.indicator_count(), 6);
}
