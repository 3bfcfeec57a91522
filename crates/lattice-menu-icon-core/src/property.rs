//! Property system for the menu icon.
//!
//! A [`Property`] wraps a value and reports whether a write actually changed
//! it. Pair it with a [`Signal`](crate::Signal) to notify observers only on
//! real changes.
//!
//! # Example
//!
//! ```
//! use lattice_menu_icon_core::Property;
//!
//! let prop = Property::new(42);
//! assert_eq!(prop.get(), 42);
//!
//! // Setting same value returns false (no change)
//! assert!(!prop.set(42));
//!
//! // Setting different value returns true (changed)
//! assert!(prop.set(100));
//! assert_eq!(prop.get(), 100);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Apply `f` to the current value under a single write lock.
    ///
    /// Returns the new value if it differs from the old one. Concurrent
    /// callers are serialized, so read-modify-write cycles are never lost.
    pub fn update<F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> T,
    {
        let mut current = self.value.write();
        let next = f(&current);
        if *current != next {
            *current = next.clone();
            Some(next)
        } else {
            None
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}
