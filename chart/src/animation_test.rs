#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_idle_at_zero() {
    let anim = Animation::default();
    assert_eq!(anim, Animation::Idle);
    assert_eq!(anim.progress(), 0.0);
}

#[test]
fn first_tick_starts_animating() {
    let mut anim = Animation::Idle;
    assert!(anim.tick());
    assert!(matches!(anim, Animation::Animating { .. }));
    assert!((anim.progress() - PROGRESS_STEP).abs() < 1e-12);
}

#[test]
fn progress_is_monotonic_and_clamps_at_one() {
    let mut anim = Animation::Idle;
    let mut last = anim.progress();
    let mut frames = 0;
    while anim.tick() {
        frames += 1;
        assert!(anim.progress() >= last);
        assert!(anim.progress() < 1.0);
        last = anim.progress();
        assert!(frames < 1000, "animation never terminated");
    }
    assert_eq!(anim, Animation::Done);
    assert_eq!(anim.progress(), 1.0);
}

#[test]
fn finishes_in_about_fifty_frames() {
    let mut anim = Animation::Idle;
    let mut frames = 1;
    while anim.tick() {
        frames += 1;
    }
    assert!((50..=51).contains(&frames), "took {frames} frames");
}

#[test]
fn done_is_terminal() {
    let mut anim = Animation::Done;
    assert!(!anim.tick());
    assert_eq!(anim, Animation::Done);
    assert_eq!(anim.progress(), 1.0);
}

#[test]
fn overshooting_step_clamps_to_exactly_one() {
    let mut anim = Animation::Animating { progress: 0.99 };
    assert!(!anim.tick_by(0.5));
    assert_eq!(anim.progress(), 1.0);
}

#[test]
fn non_positive_step_does_not_regress() {
    let mut anim = Animation::Animating { progress: 0.4 };
    assert!(anim.tick_by(-0.1));
    assert_eq!(anim.progress(), 0.4);
    assert!(anim.tick_by(0.0));
    assert_eq!(anim.progress(), 0.4);
}
