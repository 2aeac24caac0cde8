//! Per-window completion events.
//!
//! Each channel keeps its own ordered handler list and a dedicated payload
//! type, so handlers never need to inspect what kind of event they received.

use super::Window;
use crate::geometry::Rectangle;

/// Fired once when a title-bar drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMoved {
    pub rect: Rectangle,
}

/// Fired once when an edge resize ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResized {
    pub rect: Rectangle,
}

pub type Handler<T> = Box<dyn FnMut(&Window, &T)>;

/// Ordered list of handlers invoked synchronously on `fire`.
pub struct Broadcast<T> {
    handlers: Vec<Handler<T>>,
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<T> Broadcast<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, handlers: Vec<Handler<T>>) {
        self.handlers.extend(handlers);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn fire(&mut self, window: &Window, args: &T) {
        for handler in &mut self.handlers {
            handler(window, args);
        }
    }
}

impl<T> std::fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcast")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
