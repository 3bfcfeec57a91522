//! Rendering backends for the Lattice menu icon.
//!
//! The icon only ever strokes straight lines, so this crate exposes a narrow
//! immediate-mode interface, [`LineRenderer`], with two implementations:
//!
//! - [`SoftwareRenderer`]: anti-aliased CPU rasterizer with PNG export
//! - [`RecordingRenderer`]: captures [`DrawCommand`]s for inspection
//!
//! # Example
//!
//! ```
//! use lattice_menu_icon_render::{
//!     Color, LineCap, LineRenderer, Point, Size, SoftwareRenderer, Stroke,
//! };
//!
//! # fn main() -> lattice_menu_icon_render::RenderResult<()> {
//! let mut renderer = SoftwareRenderer::new(32, 32)?;
//! renderer.begin_frame(Color::WHITE, Size::new(32.0, 32.0));
//!
//! let stroke = Stroke::new(Color::BLACK, 3.0).with_cap(LineCap::Round);
//! renderer.draw_line(Point::new(6.0, 16.0), Point::new(26.0, 16.0), &stroke);
//!
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod paint;
mod recording;
mod renderer;
mod software;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{LineCap, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, LineRenderer};
pub use software::SoftwareRenderer;
pub use types::{Color, Point, Size};

// Re-export image types that users commonly need
pub use image::RgbaImage;

/// Tracing target for renderer output, shared with the widget's paint logs.
const TARGET: &str = "lattice_menu_icon::render";
