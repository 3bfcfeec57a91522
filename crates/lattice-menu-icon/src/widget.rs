//! AnimatedMenuIcon widget implementation.
//!
//! This module provides [`AnimatedMenuIcon`], a square icon of three bars that
//! morphs into an X when the menu it controls is opened.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//!
//! use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig, MenuState, MenuToggle};
//! use lattice_menu_icon::render::{Point, RecordingRenderer};
//!
//! // The host owns the toggle and flips it on user interaction.
//! let toggle = Arc::new(MenuToggle::new(MenuState::Closed));
//! let mut icon = AnimatedMenuIcon::with_toggle(
//!     MenuIconConfig::new().with_size(Dp(96.0)),
//!     toggle.clone(),
//! );
//!
//! let start = Instant::now();
//! toggle.toggle();
//!
//! let mut renderer = RecordingRenderer::new();
//! let frame = icon.paint(&mut renderer, Point::ZERO, start + Duration::from_millis(100));
//! assert!(frame.running);
//! assert_eq!(renderer.lines().count(), 3);
//! ```

use std::sync::Arc;
use std::time::Instant;

use lattice_menu_icon_core::logging::targets;
use lattice_menu_icon_core::{MenuState, MenuToggle, PerfSpan};
use lattice_menu_icon_render::{Color, LineCap, LineRenderer, Point, Size, Stroke};

use crate::animation::{AnimationFrame, MenuTransition, TransitionSpec};
use crate::config::MenuIconConfig;
use crate::density::{Density, Dp};

/// An animated hamburger-to-X menu icon.
///
/// The icon observes a shared [`MenuToggle`]. Whenever the toggle's state
/// differs from the icon's current target, the icon starts (or re-targets) its
/// transition. Hosts call [`paint`](Self::paint) every frame while
/// [`needs_repaint`](Self::needs_repaint) is `true`, and once more after each
/// toggle change.
pub struct AnimatedMenuIcon {
    size: Dp,
    density: Density,
    foreground: Color,
    toggle: Arc<MenuToggle>,
    transition: MenuTransition,
}

impl AnimatedMenuIcon {
    /// Create an icon with its own toggle, initialised from `config.menu_opened`.
    pub fn new(config: MenuIconConfig) -> Self {
        let toggle = Arc::new(MenuToggle::new(config.menu_opened.into()));
        Self::with_toggle(config, toggle)
    }

    /// Create an icon observing a toggle owned by the host.
    ///
    /// The toggle's current state wins over `config.menu_opened`; the icon
    /// starts at rest in that state.
    pub fn with_toggle(config: MenuIconConfig, toggle: Arc<MenuToggle>) -> Self {
        let size_px = config.size_px();
        warn_if_degenerate(size_px);
        let transition = MenuTransition::new(size_px, toggle.state(), config.transition);
        Self {
            size: config.size,
            density: config.density,
            foreground: config.foreground,
            toggle,
            transition,
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The shared toggle this icon observes.
    pub fn toggle_handle(&self) -> &Arc<MenuToggle> {
        &self.toggle
    }

    /// Whether the menu is currently open (the toggle's state).
    pub fn is_menu_opened(&self) -> bool {
        self.toggle.is_open()
    }

    /// Open or close the menu at `now`. Returns `true` if the state changed.
    pub fn set_menu_opened(&mut self, opened: bool, now: Instant) -> bool {
        let changed = self.toggle.set_open(opened);
        self.sync(now);
        changed
    }

    /// Flip the menu state at `now` and return the new state.
    pub fn toggle(&mut self, now: Instant) -> MenuState {
        let state = self.toggle.toggle();
        self.sync(now);
        state
    }

    /// Pick up toggle changes made by the host since the last frame.
    ///
    /// Returns `true` if a transition was started.
    pub fn sync(&mut self, now: Instant) -> bool {
        self.transition.set_target(self.toggle.state(), now)
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// The icon size in dp.
    pub fn size(&self) -> Dp {
        self.size
    }

    /// Set the icon size. Snaps to the new geometry without animating.
    pub fn set_size(&mut self, size: Dp) {
        self.size = size;
        self.apply_size();
    }

    /// The density used to convert the size to pixels.
    pub fn density(&self) -> Density {
        self.density
    }

    /// Set the density, e.g. after the window moved to another monitor.
    pub fn set_density(&mut self, density: Density) {
        self.density = density;
        self.apply_size();
    }

    /// The icon side length in pixels.
    pub fn size_px(&self) -> f32 {
        self.density.to_px(self.size)
    }

    /// The square area the icon occupies.
    pub fn size_hint(&self) -> Size {
        Size::square(self.size_px())
    }

    /// The bar color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Set the bar color.
    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// The transition timing.
    pub fn transition_spec(&self) -> TransitionSpec {
        self.transition.spec()
    }

    /// Set the transition timing at `now`. A running transition continues
    /// smoothly with the new timing.
    pub fn set_transition_spec(&mut self, spec: TransitionSpec, now: Instant) {
        self.transition.set_spec(spec, now);
    }

    fn apply_size(&mut self) {
        let size_px = self.size_px();
        warn_if_degenerate(size_px);
        self.transition.resize(size_px);
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Whether the icon is mid-transition at `now` and must keep repainting.
    pub fn needs_repaint(&self, now: Instant) -> bool {
        self.transition.target() != self.toggle.state() || self.transition.is_running(now)
    }

    /// The frame to draw at `now`, after observing the toggle.
    pub fn frame(&mut self, now: Instant) -> AnimationFrame {
        self.sync(now);
        self.transition.frame_at(now)
    }

    /// Draw the icon with its top-left corner at `origin`.
    ///
    /// Issues exactly one `draw_line` per bar, even for bars that are fully
    /// transparent, and restores the renderer's opacity afterwards.
    pub fn paint<R>(&mut self, renderer: &mut R, origin: Point, now: Instant) -> AnimationFrame
    where
        R: LineRenderer + ?Sized,
    {
        let _span = PerfSpan::new("menu_icon_paint");
        let frame = self.frame(now);
        let base_opacity = renderer.opacity();

        for bar in frame.layout.iter() {
            let stroke = Stroke::new(self.foreground, bar.thickness).with_cap(LineCap::Round);
            renderer.set_opacity(base_opacity * bar.opacity);
            renderer.draw_line(bar.start().offset(origin), bar.end().offset(origin), &stroke);
        }
        renderer.set_opacity(base_opacity);

        tracing::trace!(
            target: targets::RENDER,
            x = origin.x,
            y = origin.y,
            running = frame.running,
            "menu icon painted"
        );
        frame
    }
}

fn warn_if_degenerate(size_px: f32) {
    if size_px.is_nan() || size_px <= 0.0 {
        tracing::warn!(
            target: targets::RENDER,
            size_px,
            "menu icon size is not positive; bars will be degenerate"
        );
    }
}

static_assertions::assert_impl_all!(AnimatedMenuIcon: Send, Sync);
