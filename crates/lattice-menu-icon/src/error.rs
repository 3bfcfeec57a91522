//! Error types for the menu icon crate.

use std::path::PathBuf;

use lattice_menu_icon_render::RenderError;
use thiserror::Error;

/// Errors raised while configuring or hosting the menu icon.
///
/// Geometry and animation are infallible; these only come from validating
/// host-supplied configuration and from rendering backends.
#[derive(Error, Debug)]
pub enum MenuIconError {
    /// A density scale factor was not a positive finite number.
    #[error("invalid density scale {0}: must be finite and greater than zero")]
    InvalidDensity(f32),

    /// An icon size was not a positive finite number of dp.
    #[error("invalid icon size {0}dp: must be finite and greater than zero")]
    InvalidSize(f32),

    /// An easing name was not recognised.
    #[error("unknown easing {0:?}")]
    UnknownEasing(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendering backend failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for menu icon operations.
pub type Result<T> = std::result::Result<T, MenuIconError>;
