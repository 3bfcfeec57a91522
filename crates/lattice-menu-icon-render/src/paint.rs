//! Stroke styles for line drawing.

use crate::types::Color;

/// Stroke style options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Line cap style.
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Set the line cap style.
    #[inline]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Half the stroke width, clamped to zero for negative widths.
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.width * 0.5).max(0.0)
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap at the exact endpoint.
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint.
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl LineCap {
    /// How far the cap extends past each endpoint, for a given half width.
    #[inline]
    pub fn extension(self, half_width: f32) -> f32 {
        match self {
            LineCap::Butt => 0.0,
            LineCap::Round | LineCap::Square => half_width,
        }
    }
}
