//! Prelude module for the menu icon.
//!
//! ```
//! use lattice_menu_icon::prelude::*;
//! ```

// ============================================================================
// Widget and Configuration
// ============================================================================

pub use crate::config::MenuIconConfig;
pub use crate::density::{Density, Dp};
pub use crate::error::{MenuIconError, Result};
pub use crate::widget::AnimatedMenuIcon;

// ============================================================================
// State and Change Notification
// ============================================================================

pub use crate::{MenuState, MenuToggle, Signal};

// ============================================================================
// Geometry and Animation
// ============================================================================

pub use crate::animation::{Easing, TransitionSpec};
pub use crate::geometry::{BarLayout, BarSpec, resolve};

// ============================================================================
// Rendering
// ============================================================================

pub use crate::render::{Color, LineRenderer, Point, RecordingRenderer, SoftwareRenderer};
