//! The open/closed state cell shared between a host and the menu icon.

use std::fmt;

use crate::logging::targets;
use crate::property::Property;
use crate::signal::Signal;

/// Whether the menu the icon controls is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    /// Three horizontal bars.
    #[default]
    Closed,
    /// An X.
    Open,
}

impl MenuState {
    /// Returns `true` if the state is `Open`.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

impl From<MenuState> for bool {
    fn from(state: MenuState) -> Self {
        state.is_open()
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => f.write_str("closed"),
            MenuState::Open => f.write_str("open"),
        }
    }
}

/// A reactive menu state cell.
///
/// The host mutates it on user interaction; widgets read it every frame and
/// may also subscribe to [`changed`](Self::changed) to schedule repaints.
/// Share it between both sides with an `Arc`.
///
/// # Signals
///
/// - `changed(MenuState)`: Emitted after the state actually changed
#[derive(Debug, Default)]
pub struct MenuToggle {
    state: Property<MenuState>,
    /// Signal emitted when the state changes.
    pub changed: Signal<MenuState>,
}

impl MenuToggle {
    /// Create a toggle in the given initial state.
    pub fn new(initial: MenuState) -> Self {
        Self {
            state: Property::new(initial),
            changed: Signal::new(),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Returns `true` if the menu is open.
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Set the state. Returns `true` and emits `changed` if it differed.
    pub fn set(&self, state: MenuState) -> bool {
        if self.state.set(state) {
            tracing::debug!(target: targets::TOGGLE, %state, "menu state changed");
            self.changed.emit(state);
            true
        } else {
            false
        }
    }

    /// Set the state from a boolean "is open" flag.
    pub fn set_open(&self, open: bool) -> bool {
        self.set(open.into())
    }

    /// Flip the state and return the new value.
    ///
    /// The flip is atomic: concurrent toggles from several threads each
    /// observe the value left by the previous one.
    pub fn toggle(&self) -> MenuState {
        match self.state.update(|state| state.toggled()) {
            Some(state) => {
                tracing::debug!(target: targets::TOGGLE, %state, "menu toggled");
                self.changed.emit(state);
                state
            }
            // Unreachable: a flipped state always differs.
            None => self.state.get(),
        }
    }
}

static_assertions::assert_impl_all!(MenuToggle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_menu_state_bool_conversion() {
        assert_eq!(MenuState::from(true), MenuState::Open);
        assert_eq!(MenuState::from(false), MenuState::Closed);
        assert!(bool::from(MenuState::Open));
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_emits_on_change_only() {
        let toggle = MenuToggle::new(MenuState::Closed);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        toggle.changed.connect(move |&state| seen_clone.lock().push(state));

        assert!(!toggle.set(MenuState::Closed));
        assert!(toggle.set_open(true));
        assert_eq!(toggle.toggle(), MenuState::Closed);

        assert_eq!(*seen.lock(), vec![MenuState::Open, MenuState::Closed]);
        assert!(!toggle.is_open());
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        const THREADS: usize = 8;
        const TOGGLES: usize = 5000;

        let toggle = Arc::new(MenuToggle::new(MenuState::Closed));
        let opened = Arc::new(AtomicUsize::new(0));
        let closed = Arc::new(AtomicUsize::new(0));

        let (opened_clone, closed_clone) = (opened.clone(), closed.clone());
        toggle.changed.connect(move |state| {
            let counter = if state.is_open() { &opened_clone } else { &closed_clone };
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let toggle = toggle.clone();
                std::thread::spawn(move || {
                    for _ in 0..TOGGLES {
                        toggle.toggle();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // An even number of flips lands back where it started.
        assert_eq!(toggle.state(), MenuState::Closed);
        assert_eq!(opened.load(Ordering::SeqCst), THREADS * TOGGLES / 2);
        assert_eq!(closed.load(Ordering::SeqCst), THREADS * TOGGLES / 2);
    }
}
