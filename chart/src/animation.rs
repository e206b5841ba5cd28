//! One-shot grow-in animation as an explicit state machine.
//!
//! The host frame loop calls [`Animation::tick`] once per frame and keeps
//! scheduling frames only while it returns `true`. Progress never decreases
//! and stops at exactly `1.0`; `Done` is terminal.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::consts::PROGRESS_STEP;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    /// Not started; the chart draws at zero height.
    #[default]
    Idle,
    /// Growing; `progress` is in `(0, 1)`.
    Animating { progress: f64 },
    /// Fully grown. No further frames are needed.
    Done,
}

impl Animation {
    /// Current height multiplier in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Animating { progress } => progress,
            Self::Done => 1.0,
        }
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Advance by one frame.
    ///
    /// Returns `true` if another frame should be scheduled.
    pub fn tick(&mut self) -> bool {
        self.tick_by(PROGRESS_STEP)
    }

    /// Advance by an explicit step. Non-positive steps leave the state unchanged.
    pub fn tick_by(&mut self, step: f64) -> bool {
        if self.is_done() {
            return false;
        }
        if step <= 0.0 || step.is_nan() {
            return true;
        }
        let next = (self.progress() + step).min(1.0);
        *self = if next >= 1.0 { Self::Done } else { Self::Animating { progress: next } };
        !self.is_done()
    }
}
