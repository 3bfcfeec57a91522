//! Time-based interpolation of a single scalar.

use std::time::{Duration, Instant};

use super::easing::{Easing, lerp_eased};

/// An interruptible tween of one `f32` value.
///
/// A tween is either settled (holding its target) or running from a start
/// value toward its target. Calling [`retarget`](Self::retarget) while it is
/// running restarts from the value it has *at that instant*, so the animated
/// value never jumps.
///
/// Time is always passed in by the caller, which keeps tweens deterministic
/// under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Create a settled tween holding `value`.
    pub fn new(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration,
            easing,
        }
    }

    /// The value this tween is heading toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// The value the current run started from.
    #[inline]
    pub fn start_value(&self) -> f32 {
        self.from
    }

    /// The configured duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The configured easing.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Change the timing at `now`.
    ///
    /// A tween running at `now` is rebased: it restarts from its current
    /// value and covers the remaining distance with the new timing, so the
    /// value does not jump. A zero duration settles it on its target.
    pub fn set_timing(&mut self, duration: Duration, easing: Easing, now: Instant) {
        if self.is_running_at(now) && !duration.is_zero() {
            self.from = self.value_at(now);
            self.started_at = Some(now);
        } else {
            self.from = self.to;
            self.started_at = None;
        }
        self.duration = duration;
        self.easing = easing;
    }

    /// Linear progress (0.0 to 1.0) at `now`; `1.0` when settled.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween is still moving at `now`.
    #[inline]
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.progress_at(now) < 1.0
    }

    /// The eased value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.to;
        }
        lerp_eased(self.easing, self.from, self.to, progress)
    }

    /// Head toward `target`, starting from the value at `now`.
    ///
    /// Returns `false` when `target` already is the destination, in which case
    /// an in-flight run continues undisturbed.
    pub fn retarget(&mut self, target: f32, now: Instant) -> bool {
        if target == self.to {
            return false;
        }
        let current = self.value_at(now);
        self.from = current;
        self.to = target;
        self.started_at = if current == target || self.duration.is_zero() {
            None
        } else {
            Some(now)
        };
        true
    }

    /// Jump to `value` immediately and stop any run.
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.started_at = None;
    }
}
