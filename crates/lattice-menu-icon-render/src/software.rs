//! CPU rasterizer for stroked lines.
//!
//! [`SoftwareRenderer`] draws anti-aliased lines into an in-memory
//! premultiplied buffer. It needs no GPU or window, which makes it suitable
//! for headless hosts, screenshots and pixel tests.

use std::path::Path;

use glam::Vec2;
use image::RgbaImage;

use crate::TARGET;
use crate::error::{RenderError, RenderResult};
use crate::paint::{LineCap, Stroke};
use crate::renderer::{FrameStats, LineRenderer};
use crate::types::{Color, Point, Size};

/// An anti-aliased CPU line renderer.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    opacity: f32,
    stats: FrameStats,
}

impl SoftwareRenderer {
    /// Create a renderer with a transparent `width × height` buffer.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
            opacity: 1.0,
            stats: FrameStats::default(),
        })
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The premultiplied color of a pixel, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Copy the buffer into a non-premultiplied RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[self.index(x, y)].to_rgba8())
        })
    }

    /// Encode the buffer as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_image().save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(target: TARGET, path = %path.display(), "wrote png");
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel range `[lo, hi)` covering `[min, max]`, clamped to `0..limit`.
    fn span(min: f32, max: f32, limit: u32) -> (u32, u32) {
        let lo = min.floor().max(0.0);
        let hi = max.ceil().min(limit as f32);
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return (0, 0);
        }
        (lo as u32, hi as u32)
    }
}

/// Coverage of the pixel centred at `p` by a stroked segment `a → b`.
fn coverage(p: Vec2, a: Vec2, b: Vec2, half_width: f32, cap: LineCap) -> f32 {
    let seg = b - a;
    let len_sq = seg.length_squared();

    match cap {
        LineCap::Round => {
            let t = if len_sq > f32::EPSILON {
                ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let d = (p - (a + seg * t)).length();
            (half_width - d + 0.5).clamp(0.0, 1.0)
        }
        LineCap::Butt | LineCap::Square => {
            if len_sq <= f32::EPSILON && cap == LineCap::Butt {
                return 0.0;
            }
            let len = len_sq.sqrt();
            let dir = if len > f32::EPSILON { seg / len } else { Vec2::X };
            let ext = cap.extension(half_width);
            let rel = p - a;
            let along = rel.dot(dir);
            let across = rel.perp_dot(dir).abs();

            let across_cov = (half_width - across + 0.5).clamp(0.0, 1.0);
            let along_cov = (along + ext + 0.5).min(len + ext - along + 0.5).clamp(0.0, 1.0);
            across_cov * along_cov
        }
    }
}

impl LineRenderer for SoftwareRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        if viewport_size.width as u32 != self.width || viewport_size.height as u32 != self.height {
            tracing::trace!(
                target: TARGET,
                width = viewport_size.width,
                height = viewport_size.height,
                "viewport differs from buffer; drawing is clipped to the buffer"
            );
        }
        self.pixels.fill(clear_color);
        self.opacity = 1.0;
        self.stats = FrameStats::default();
    }

    fn end_frame(&mut self) -> FrameStats {
        tracing::trace!(
            target: TARGET,
            draw_calls = self.stats.draw_calls,
            skipped = self.stats.skipped,
            "software frame finished"
        );
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
        let half_width = stroke.half_width();
        let a = from.to_vec2();
        let b = to.to_vec2();

        if half_width <= 0.0 || self.opacity <= 0.0 || stroke.color.a <= 0.0 {
            self.stats.skipped += 1;
            return;
        }
        if stroke.cap == LineCap::Butt && a == b {
            self.stats.skipped += 1;
            return;
        }

        let pad = half_width + stroke.cap.extension(half_width) + 1.0;
        let min = a.min(b) - Vec2::splat(pad);
        let max = a.max(b) + Vec2::splat(pad);
        let (x0, x1) = Self::span(min.x, max.x, self.width);
        let (y0, y1) = Self::span(min.y, max.y, self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let cov = coverage(p, a, b, half_width, stroke.cap);
                if cov <= 0.0 {
                    continue;
                }
                let idx = self.index(x, y);
                self.pixels[idx] = stroke.color.scaled(cov * self.opacity).over(self.pixels[idx]);
            }
        }
        self.stats.draw_calls += 1;
    }
}
