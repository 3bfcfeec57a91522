//! Animation support for the menu icon.
//!
//! This module provides easing functions, an interruptible scalar
//! [`Tween`], and the [`MenuTransition`] that drives all animated bar values
//! between the closed and open layouts.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! ```
//! use lattice_menu_icon::animation::{Easing, ease};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//! ```

mod easing;
mod transition;
mod tween;

pub use easing::{Easing, ease, lerp_eased};
pub use transition::{AnimationFrame, DEFAULT_DURATION, MenuTransition, TransitionSpec};
pub use tween::Tween;
