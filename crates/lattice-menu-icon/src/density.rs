//! Device-independent sizes.
//!
//! Icon sizes are specified in density-independent pixels ([`Dp`]) and
//! converted to physical pixels with an explicit [`Density`], typically the
//! window's scale factor.

use std::fmt;

use crate::error::{MenuIconError, Result};

/// A length in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// Pixels per dp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    /// Create a density from a scale factor.
    ///
    /// Fails unless `scale` is finite and positive.
    pub fn new(scale: f32) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MenuIconError::InvalidDensity(scale));
        }
        Ok(Self { scale })
    }

    /// The scale factor.
    #[inline]
    pub fn scale(self) -> f32 {
        self.scale
    }

    /// Convert dp to pixels.
    #[inline]
    pub fn to_px(self, dp: Dp) -> f32 {
        dp.0 * self.scale
    }
}
