//! Observer List for Menu Events
//!
//! Provides a minimal in-process publish/subscribe list. Components own an
//! [`Observable`] per event they emit; interested parties attach callbacks
//! and are notified synchronously, in attachment order, on the UI thread.
//!
//! There is no payload, no deduplication and no debouncing: one call to
//! [`Observable::notify_observers`] invokes every attached callback exactly
//! once.
//!
//! # Example
//!
//! ```rust
//! use crate::events::Observable;
//!
//! let mut on_game_start = Observable::new();
//! let token = on_game_start.add(|| println!("start requested"));
//!
//! on_game_start.notify_observers(); // prints once
//! on_game_start.remove(token);
//! on_game_start.notify_observers(); // prints nothing
//! ```

/// Handle returned by [`Observable::add`], used to detach a callback later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverToken(u64);

/// A per-instance list of no-argument callbacks
///
/// Callbacks are stored boxed and invoked in the order they were attached.
/// Removal is by token rather than index so earlier detachments don't shift
/// later handles.
pub struct Observable {
    observers: Vec<(ObserverToken, Box<dyn FnMut()>)>,
    next_token: u64,
}

impl Observable {
    /// Creates an empty observer list
    pub fn new() -> Self {
        Observable {
            observers: Vec::new(),
            next_token: 0,
        }
    }

    /// Attach a callback; returns a token for later removal
    pub fn add<F: FnMut() + 'static>(&mut self, callback: F) -> ObserverToken {
        let token = ObserverToken(self.next_token);
        self.next_token += 1;
        self.observers.push((token, Box::new(callback)));
        token
    }

    /// Detach a previously attached callback
    ///
    /// Returns `false` if the token was already removed (or never issued by
    /// this list).
    pub fn remove(&mut self, token: ObserverToken) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(t, _)| *t != token);
        self.observers.len() != before
    }

    /// Invoke every attached callback once, in attachment order
    pub fn notify_observers(&mut self) {
        for (_, callback) in self.observers.iter_mut() {
            callback();
        }
    }

    /// Number of attached callbacks
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True if no callbacks are attached
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for Observable {
    fn default() -> Self {
        Self::new()
    }
}
