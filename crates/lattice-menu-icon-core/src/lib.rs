//! Core systems for the Lattice menu icon.
//!
//! This crate provides the small reactive layer the icon widget is driven by:
//!
//! - **Toggle**: [`MenuToggle`], the shared open/closed state cell a host flips
//!   on user interaction
//! - **Signal/Slot System**: [`Signal`] for change notification
//! - **Property System**: [`Property`] with change detection
//! - **Logging**: tracing targets and [`PerfSpan`] for profiling hooks
//!
//! # Toggle Example
//!
//! ```
//! use lattice_menu_icon_core::{MenuState, MenuToggle};
//!
//! let toggle = MenuToggle::new(MenuState::Closed);
//!
//! toggle.changed.connect(|state| {
//!     println!("menu is now {:?}", state);
//! });
//!
//! assert_eq!(toggle.toggle(), MenuState::Open);
//! assert!(toggle.is_open());
//! ```
//!
//! # Property Example
//!
//! ```
//! use lattice_menu_icon_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;
mod toggle;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use toggle::{MenuState, MenuToggle};
