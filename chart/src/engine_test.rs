#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Viewport
// =============================================================

#[test]
fn default_core_uses_weekly_series_and_is_idle() {
    let core = ChartCore::default();
    assert_eq!(core.series, Series::weekly());
    assert_eq!(core.animation, Animation::Idle);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn set_viewport_scales_backing_store_by_dpr() {
    let mut core = ChartCore::default();
    let (w, h) = core.set_viewport(400.0, 300.0, 2.0);
    assert_eq!((w, h), (800, 600));
    assert_eq!(core.viewport_width, 400.0);
    assert_eq!(core.viewport_height, 300.0);
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn set_viewport_rounds_fractional_sizes() {
    let mut core = ChartCore::default();
    let (w, h) = core.set_viewport(100.4, 50.5, 1.5);
    assert_eq!((w, h), (151, 76));
}

#[test]
fn set_viewport_rejects_invalid_dpr() {
    let mut core = ChartCore::default();
    core.set_viewport(100.0, 100.0, 0.0);
    assert_eq!(core.dpr, 1.0);
    core.set_viewport(100.0, 100.0, f64::NAN);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn set_viewport_clamps_negative_sizes() {
    let mut core = ChartCore::default();
    let (w, h) = core.set_viewport(-10.0, -5.0, 1.0);
    assert_eq!((w, h), (0, 0));
}

#[test]
fn resize_keeps_animation_progress() {
    let mut core = ChartCore::default();
    core.set_viewport(400.0, 300.0, 1.0);
    for _ in 0..10 {
        core.tick();
    }
    let before = core.progress();
    core.set_viewport(800.0, 600.0, 2.0);
    assert_eq!(core.progress(), before);
}

// =============================================================
// Animation
// =============================================================

#[test]
fn tick_runs_to_done_then_stops() {
    let mut core = ChartCore::default();
    let mut frames = 0;
    while core.tick() {
        frames += 1;
        assert!(frames < 100);
    }
    assert!(core.animation.is_done());
    assert_eq!(core.progress(), 1.0);
    assert!(!core.tick());
}

#[test]
fn layout_follows_viewport() {
    let mut core = ChartCore::default();
    core.set_viewport(520.0, 320.0, 2.0);
    let layout = core.layout();
    assert_eq!(layout.width, 520.0);
    assert_eq!(layout.height, 320.0);
}
