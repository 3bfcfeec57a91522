//! The menu icon's open/close transition.
//!
//! [`MenuTransition`] keeps one [`Tween`] per [`Channel`] and moves all of
//! them together whenever the target state changes. Size-derived values that
//! are the same in both states ([`BarMetrics`]) are never interpolated.

use std::time::{Duration, Instant};

use lattice_menu_icon_core::MenuState;
use lattice_menu_icon_core::logging::targets;

use super::easing::Easing;
use super::tween::Tween;
use crate::geometry::{BarChannels, BarLayout, BarMetrics, Channel};

/// Duration of a full open/close transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Timing of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    /// How long a full transition takes.
    pub duration: Duration,
    /// The easing curve applied to every channel.
    pub easing: Easing,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::FastOutSlowIn,
        }
    }
}

impl TransitionSpec {
    /// Create a spec with the given duration and easing.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// A spec that switches states instantly.
    pub fn instant() -> Self {
        Self::default().with_duration(Duration::ZERO)
    }
}

/// A snapshot of the icon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// The interpolated bars.
    pub layout: BarLayout,
    /// The state the icon is heading toward.
    pub target: MenuState,
    /// Whether any channel is still moving.
    pub running: bool,
}

/// Drives the bars between the closed and open layouts.
///
/// Transitions are interruptible: a new target arriving mid-flight restarts
/// every channel from its current value, so the icon never jumps.
///
/// ```
/// use std::time::{Duration, Instant};
/// use lattice_menu_icon::animation::{MenuTransition, TransitionSpec};
/// use lattice_menu_icon::MenuState;
///
/// let start = Instant::now();
/// let mut transition = MenuTransition::new(192.0, MenuState::Closed, TransitionSpec::default());
///
/// transition.set_target(MenuState::Open, start);
/// assert!(transition.is_running(start + Duration::from_millis(150)));
///
/// let done = transition.frame_at(start + Duration::from_millis(300));
/// assert!(!done.running);
/// assert_eq!(done.layout.middle().opacity, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MenuTransition {
    metrics: BarMetrics,
    target: MenuState,
    spec: TransitionSpec,
    channels: [Tween; Channel::COUNT],
}

impl MenuTransition {
    /// Create a transition resting in `initial` on a `size` pixel canvas.
    pub fn new(size: f32, initial: MenuState, spec: TransitionSpec) -> Self {
        let metrics = BarMetrics::new(size);
        let rest = BarChannels::target(&metrics, initial);
        let channels = Channel::ALL.map(|c| Tween::new(rest.get(c), spec.duration, spec.easing));
        Self {
            metrics,
            target: initial,
            spec,
            channels,
        }
    }

    /// The fixed, size-derived metrics.
    #[inline]
    pub fn metrics(&self) -> &BarMetrics {
        &self.metrics
    }

    /// The state the icon rests in or is heading toward.
    #[inline]
    pub fn target(&self) -> MenuState {
        self.target
    }

    /// The timing applied to transitions.
    #[inline]
    pub fn spec(&self) -> TransitionSpec {
        self.spec
    }

    /// Change the timing at `now`.
    ///
    /// An in-flight transition continues from where the bars are and
    /// finishes with the new timing.
    pub fn set_spec(&mut self, spec: TransitionSpec, now: Instant) {
        self.spec = spec;
        for tween in &mut self.channels {
            tween.set_timing(spec.duration, spec.easing, now);
        }
    }

    /// The tween of one channel.
    pub fn tween(&self, channel: Channel) -> &Tween {
        &self.channels[channel.index()]
    }

    /// Start moving toward `state` at `now`.
    ///
    /// Returns `false` if `state` already is the target.
    pub fn set_target(&mut self, state: MenuState, now: Instant) -> bool {
        if state == self.target {
            return false;
        }
        let interrupted = self.is_running(now);
        self.target = state;

        let goal = BarChannels::target(&self.metrics, state);
        for channel in Channel::ALL {
            let tween = &mut self.channels[channel.index()];
            let from = tween.value_at(now);
            tween.retarget(goal.get(channel), now);
            tracing::trace!(
                target: targets::TRANSITION,
                channel = channel.label(),
                from,
                to = tween.target(),
                "channel retargeted"
            );
        }

        tracing::debug!(
            target: targets::TRANSITION,
            %state,
            interrupted,
            duration_ms = self.spec.duration.as_millis() as u64,
            easing = %self.spec.easing,
            "transition started"
        );
        true
    }

    /// Jump to the resting layout of `state` without animating.
    pub fn snap_to(&mut self, state: MenuState) {
        self.target = state;
        let rest = BarChannels::target(&self.metrics, state);
        for channel in Channel::ALL {
            self.channels[channel.index()].snap_to(rest.get(channel));
        }
    }

    /// Adopt a new canvas size.
    ///
    /// Every channel snaps to the current target's layout at the new size;
    /// an in-flight transition is finished instantly.
    pub fn resize(&mut self, size: f32) {
        if size == self.metrics.size {
            return;
        }
        tracing::debug!(
            target: targets::TRANSITION,
            from = self.metrics.size,
            to = size,
            "icon resized"
        );
        self.metrics = BarMetrics::new(size);
        self.snap_to(self.target);
    }

    /// Whether any channel is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.channels.iter().any(|tween| tween.is_running_at(now))
    }

    /// Interpolated channel values at `now`.
    pub fn channels_at(&self, now: Instant) -> BarChannels {
        BarChannels::from_fn(|channel| self.channels[channel.index()].value_at(now))
    }

    /// The frame to draw at `now`.
    pub fn frame_at(&self, now: Instant) -> AnimationFrame {
        let layout = self.metrics.layout(&self.channels_at(now));
        let running = self.is_running(now);
        tracing::trace!(
            target: targets::TRANSITION,
            running,
            middle_opacity = layout.middle().opacity,
            "frame evaluated"
        );
        AnimationFrame {
            layout,
            target: self.target,
            running,
        }
    }
}
