//! Configuration for the menu icon.
//!
//! [`MenuIconConfig`] is a plain builder with sensible defaults. It can also be
//! read from TOML; every key is optional:
//!
//! ```toml
//! menu_opened = false
//! size_dp = 96.0
//! density = 2.0
//! foreground = "#212121"
//! duration_ms = 300
//! easing = "fast-out-slow-in"
//! ```

use std::path::Path;
use std::time::Duration;

use lattice_menu_icon_core::logging::targets;
use lattice_menu_icon_render::Color;
use serde::Deserialize;

use crate::animation::{Easing, TransitionSpec};
use crate::density::{Density, Dp};
use crate::error::{MenuIconError, Result};

/// Default icon size.
pub const DEFAULT_SIZE: Dp = Dp(24.0);

/// Default bar color, a near-black suitable for light surfaces.
pub fn default_foreground() -> Color {
    Color::from_rgb8(33, 33, 33)
}

/// Everything a host can configure on an [`AnimatedMenuIcon`](crate::AnimatedMenuIcon).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuIconConfig {
    /// Initial state of the menu.
    pub menu_opened: bool,
    /// Side length of the square icon.
    pub size: Dp,
    /// Pixels per dp.
    pub density: Density,
    /// Color of the bars.
    pub foreground: Color,
    /// Transition timing.
    pub transition: TransitionSpec,
}

impl Default for MenuIconConfig {
    fn default() -> Self {
        Self {
            menu_opened: false,
            size: DEFAULT_SIZE,
            density: Density::default(),
            foreground: default_foreground(),
            transition: TransitionSpec::default(),
        }
    }
}

impl MenuIconConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state.
    pub fn with_menu_opened(mut self, opened: bool) -> Self {
        self.menu_opened = opened;
        self
    }

    /// Set the icon size.
    pub fn with_size(mut self, size: Dp) -> Self {
        self.size = size;
        self
    }

    /// Set the density.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Set the bar color.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the transition timing.
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// The icon side length in pixels.
    #[inline]
    pub fn size_px(&self) -> f32 {
        self.density.to_px(self.size)
    }

    /// Parse a config from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.into_config()
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| MenuIconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            size = %config.size,
            density = config.density.scale(),
            "loaded menu icon config"
        );
        Ok(config)
    }
}

/// On-disk shape of [`MenuIconConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    menu_opened: Option<bool>,
    size_dp: Option<f32>,
    density: Option<f32>,
    foreground: Option<String>,
    duration_ms: Option<u64>,
    easing: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> Result<MenuIconConfig> {
        let defaults = MenuIconConfig::default();

        let size = match self.size_dp {
            Some(dp) if !dp.is_finite() || dp <= 0.0 => return Err(MenuIconError::InvalidSize(dp)),
            Some(dp) => Dp(dp),
            None => defaults.size,
        };
        let density = match self.density {
            Some(scale) => Density::new(scale)?,
            None => defaults.density,
        };
        let foreground = match self.foreground {
            Some(hex) => hex.parse::<Color>()?,
            None => defaults.foreground,
        };

        let mut transition = defaults.transition;
        if let Some(ms) = self.duration_ms {
            transition.duration = Duration::from_millis(ms);
        }
        if let Some(name) = self.easing {
            transition.easing = name.parse::<Easing>()?;
        }

        Ok(MenuIconConfig {
            menu_opened: self.menu_opened.unwrap_or(defaults.menu_opened),
            size,
            density,
            foreground,
            transition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuIconConfig::default();
        assert!(!config.menu_opened);
        assert_eq!(config.size, Dp(24.0));
        assert_eq!(config.size_px(), 24.0);
        assert_eq!(config.transition.duration, Duration::from_millis(300));
        assert_eq!(config.foreground, Color::from_rgb8(33, 33, 33));
    }

    #[test]
    fn test_builder() {
        let config = MenuIconConfig::new()
            .with_menu_opened(true)
            .with_size(Dp(96.0))
            .with_density(Density::new(2.0).unwrap())
            .with_foreground(Color::WHITE);
        assert!(config.menu_opened);
        assert_eq!(config.size_px(), 192.0);
        assert_eq!(config.foreground, Color::WHITE);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(MenuIconConfig::from_toml_str("").unwrap(), MenuIconConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = MenuIconConfig::from_toml_str(
            r##"
            menu_opened = true
            size_dp = 96.0
            density = 1.5
            foreground = "#FFFFFF"
            duration_ms = 450
            easing = "ease-in-out"
            "##,
        )
        .unwrap();

        assert!(config.menu_opened);
        assert_eq!(config.size, Dp(96.0));
        assert_eq!(config.size_px(), 144.0);
        assert_eq!(config.foreground, Color::WHITE);
        assert_eq!(
            config.transition,
            TransitionSpec::new(Duration::from_millis(450), Easing::EaseInOut)
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            MenuIconConfig::from_toml_str("size_dp = -4.0"),
            Err(MenuIconError::InvalidSize(_))
        ));
        assert!(matches!(
            MenuIconConfig::from_toml_str("density = 0.0"),
            Err(MenuIconError::InvalidDensity(_))
        ));
        assert!(matches!(
            MenuIconConfig::from_toml_str("foreground = \"blue\""),
            Err(MenuIconError::Render(_))
        ));
        assert!(matches!(
            MenuIconConfig::from_toml_str("easing = \"wobble\""),
            Err(MenuIconError::UnknownEasing(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            MenuIconConfig::from_toml_str("colour = \"#000000\""),
            Err(MenuIconError::Config(_))
        ));
    }
}
