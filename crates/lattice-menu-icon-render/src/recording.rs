//! A renderer that records draw calls instead of producing pixels.
//!
//! Useful for asserting on exactly what a widget painted.

use crate::paint::Stroke;
use crate::renderer::{FrameStats, LineRenderer};
use crate::types::{Color, Point, Size};

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A frame was started.
    BeginFrame {
        clear_color: Color,
        viewport_size: Size,
    },
    /// A line was stroked at the given opacity.
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
        opacity: f32,
    },
}

/// Records every [`LineRenderer`] call.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    opacity: f32,
    stats: FrameStats,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            opacity: 1.0,
            stats: FrameStats::default(),
        }
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the recorded lines, as `(from, to, stroke, opacity)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Stroke, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line {
                from,
                to,
                stroke,
                opacity,
            } => Some((from, to, stroke, opacity)),
            DrawCommand::BeginFrame { .. } => None,
        })
    }

    /// Discard everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stats = FrameStats::default();
    }
}

impl LineRenderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.stats = FrameStats::default();
        self.opacity = 1.0;
        self.commands.push(DrawCommand::BeginFrame {
            clear_color,
            viewport_size,
        });
    }

    fn end_frame(&mut self) -> FrameStats {
        self.stats
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.stats.state_changes += 1;
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.stats.draw_calls += 1;
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
            opacity: self.opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::LineCap;

    #[test]
    fn test_records_lines_with_opacity() {
        let mut recorder = RecordingRenderer::new();
        let stroke = Stroke::new(Color::BLACK, 2.0).with_cap(LineCap::Round);

        recorder.begin_frame(Color::WHITE, Size::square(10.0));
        recorder.set_opacity(0.25);
        recorder.draw_line(Point::ZERO, Point::new(5.0, 5.0), &stroke);
        let stats = recorder.end_frame();

        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.state_changes, 1);
        let lines: Vec<_> = recorder.lines().collect();
        assert_eq!(lines, vec![(Point::ZERO, Point::new(5.0, 5.0), stroke, 0.25)]);
        assert_eq!(recorder.commands().len(), 2);
    }
}
