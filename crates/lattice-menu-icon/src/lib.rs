//! Lattice Menu Icon - an animated hamburger-to-X menu icon.
//!
//! This is the umbrella crate: it re-exports the core toggle/signal layer and
//! exposes the rendering backends under [`render`].
//!
//! The icon is three horizontal bars. When the menu it controls opens, the
//! outer bars swing into the diagonals of an X and the middle bar fades out;
//! closing plays the motion in reverse. All geometry is derived from the icon
//! size alone, see [`geometry`].
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig};
//! use lattice_menu_icon::render::{Point, RecordingRenderer};
//!
//! let mut icon = AnimatedMenuIcon::new(MenuIconConfig::new().with_size(Dp(48.0)));
//! let start = Instant::now();
//! icon.toggle(start);
//!
//! let mut renderer = RecordingRenderer::new();
//! let frame = icon.paint(&mut renderer, Point::ZERO, start + Duration::from_millis(300));
//! assert!(!frame.running);
//! assert_eq!(frame.layout.middle().opacity, 0.0);
//! ```

pub mod animation;
pub mod config;
pub mod density;
pub mod error;
pub mod geometry;
pub mod prelude;
mod widget;

pub use lattice_menu_icon_core::*;

pub use config::MenuIconConfig;
pub use density::{Density, Dp};
pub use error::{MenuIconError, Result};
pub use geometry::{BarLayout, BarSpec, resolve};
pub use widget::AnimatedMenuIcon;

/// Line rendering backends.
pub mod render {
    pub use lattice_menu_icon_render::*;
}
