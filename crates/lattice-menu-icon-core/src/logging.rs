//! Logging facilities for the menu icon.
//!
//! The icon is instrumented with the `tracing` crate. Install a subscriber in
//! the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_menu_icon::transition=debug")
//!     .init();
//! ```
//!
//! Per-frame work is logged at `trace`, state changes and retargeting at
//! `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_menu_icon::signal";
    /// Toggle state cell target.
    pub const TOGGLE: &str = "lattice_menu_icon::toggle";
    /// Transition driver target.
    pub const TRANSITION: &str = "lattice_menu_icon::transition";
    /// Widget painting target.
    pub const RENDER: &str = "lattice_menu_icon::render";
    /// Configuration loading target.
    pub const CONFIG: &str = "lattice_menu_icon::config";
    /// Performance span target.
    pub const PERF: &str = "lattice_menu_icon::perf";
}

/// A guard for timing an operation.
///
/// The span is entered on creation and exited when the guard is dropped.
///
/// ```
/// use lattice_menu_icon_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("paint_icon");
///     // ... work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_menu_icon::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
