//! The line-drawing interface the menu icon paints through.
//!
//! [`LineRenderer`] is a deliberately narrow immediate-mode API: a frame is
//! opened, lines are stroked with a global opacity, and the frame is closed.
//!
//! ```ignore
//! renderer.begin_frame(Color::WHITE, Size::new(96.0, 96.0));
//!
//! renderer.set_opacity(0.5);
//! renderer.draw_line(Point::new(8.0, 8.0), Point::new(88.0, 8.0), &stroke);
//! renderer.set_opacity(1.0);
//!
//! let stats = renderer.end_frame();
//! ```

use crate::paint::Stroke;
use crate::types::{Color, Point, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of line draw calls that produced output.
    pub draw_calls: u32,
    /// Number of draw calls skipped because nothing would be visible.
    pub skipped: u32,
    /// Number of opacity changes.
    pub state_changes: u32,
}

/// Immediate-mode line drawing.
pub trait LineRenderer {
    /// Begin a new frame cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame and return its statistics.
    fn end_frame(&mut self) -> FrameStats;

    /// The opacity applied to subsequent draws.
    fn opacity(&self) -> f32;

    /// Set the opacity (0.0 to 1.0) applied to subsequent draws.
    fn set_opacity(&mut self, opacity: f32);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}
