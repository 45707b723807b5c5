//! # State Module
//!
//! Lock wrappers for the store's slices and the change-notification bus.
//!
//! ## Why One Lock Per Slice?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────────┐ ┌────────────┐ │
//! │  │ Slice<Auth>  │ │ Slice<Cart>  │ │ Slice<Validation │ │ Slice<     │ │
//! │  │              │ │              │ │       Board>     │ │  String>   │ │
//! │  │ user, token  │ │ items, total │ │ flags by name    │ │ language   │ │
//! │  └──────────────┘ └──────────────┘ └──────────────────┘ └────────────┘ │
//! │                                                                         │
//! │  • Slices never lock each other, so a cart edit is never blocked by    │
//! │    a login in flight.                                                  │
//! │  • No lock is held across an `.await`.                                 │
//! │  • Within a slice, lock order = call order (last write wins).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod events;

pub use events::{EventBus, StoreEvent, EVENT_CAPACITY};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A mutex-guarded piece of store state.
///
/// Closures passed to [`Slice::read`] and [`Slice::write`] run with the lock
/// held and must not block. A poisoned lock is recovered rather than
/// propagated: every mutation in this crate leaves its slice valid before
/// any point where it could panic.
#[derive(Debug, Default)]
pub struct Slice<T> {
    inner: Mutex<T>,
}

impl<T> Slice<T> {
    pub fn new(value: T) -> Self {
        Slice {
            inner: Mutex::new(value),
        }
    }

    /// Executes a function with read access to the slice.
    ///
    /// ```rust,ignore
    /// let total = cart.read(|c| c.total());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the slice.
    ///
    /// ```rust,ignore
    /// cart.write(|c| c.add_item(&product));
    /// ```
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Slice<T> {
    /// A clone of the current value.
    pub fn snapshot(&self) -> T {
        self.read(T::clone)
    }
}
