//! Owner of a stack of floating windows.
//!
//! The host keeps windows in insertion order: the last added window draws last
//! and receives input first. Windows close themselves by calling
//! [`Window::close`]; the host only queues the request and removes the window
//! once it is done iterating, so a handler can close its own window safely.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::Event;

use super::{FrameContext, Window};
use crate::drivers::mouse::PointerState;
use crate::error::WindowError;
use crate::input::{CursorShapeSetter, InputLayers};
use crate::ui::{DeferredRenders, UiFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

#[derive(Debug, Default)]
pub struct WindowHost {
    windows: Vec<(WindowId, Window)>,
    layers: InputLayers,
    pointer: PointerState,
    deferred: DeferredRenders,
    // ids queued by close callbacks; drained after dispatch and render
    closed: Rc<RefCell<Vec<WindowId>>>,
    next_id: u64,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `window`, wire its close callback and put it on top.
    pub fn add_window(&mut self, mut window: Window) -> Result<WindowId, WindowError> {
        let id = WindowId(self.next_id);
        let closed = Rc::clone(&self.closed);
        window.set_close_function(move || closed.borrow_mut().push(id))?;
        self.next_id = self.next_id.saturating_add(1);
        window.setup_input_layer(&mut self.layers);
        tracing::debug!(window_id = ?id, rect = ?window.rect(), "added window");
        self.windows.push((id, window));
        Ok(id)
    }

    pub fn remove_window(&mut self, id: WindowId) -> Option<Window> {
        let index = self.windows.iter().position(|(window_id, _)| *window_id == id)?;
        let (_, mut window) = self.windows.remove(index);
        window.teardown_input_layer(&mut self.layers);
        tracing::debug!(window_id = ?id, "removed window");
        Some(window)
    }

    /// Close `id` the same way the window would close itself.
    pub fn close_window(&mut self, id: WindowId) {
        if let Some(window) = self.window(id) {
            window.close();
        }
        self.drain_closed();
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows
            .iter()
            .find(|(window_id, _)| *window_id == id)
            .map(|(_, window)| window)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows
            .iter_mut()
            .find(|(window_id, _)| *window_id == id)
            .map(|(_, window)| window)
    }

    /// Window ids from bottom to top.
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn layers(&self) -> &InputLayers {
        &self.layers
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Offer `event` to windows from the top down. Returns `true` when a
    /// window consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.pointer.update(event);
        let mut consumed = false;
        for (_, window) in self.windows.iter_mut().rev() {
            if window.handle_event(event, &self.layers) {
                consumed = true;
                break;
            }
        }
        self.drain_closed();
        consumed
    }

    /// Update and draw every window, bottom first, then run deferred renders.
    pub fn render(&mut self, frame: &mut UiFrame<'_>, cursor: &mut dyn CursorShapeSetter) {
        for (_, window) in &mut self.windows {
            let mut ctx = FrameContext {
                pointer: &self.pointer,
                layers: &self.layers,
                cursor: &mut *cursor,
            };
            window.render(frame, &mut self.deferred, &mut ctx);
        }
        self.deferred.flush(frame);
        self.drain_closed();
    }

    fn drain_closed(&mut self) {
        let closed = std::mem::take(&mut *self.closed.borrow_mut());
        for id in closed {
            if self.remove_window(id).is_none() {
                tracing::trace!(window_id = ?id, "close requested for unknown window");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TextPanel;
    use crate::geometry::Rectangle;
    use crate::window::WindowConfig;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn window_at(rect: Rectangle) -> Window {
        WindowConfig::new()
            .contents(TextPanel::new(["x"]))
            .location(rect)
            .build()
            .unwrap()
    }

    fn press(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn topmost_window_consumes_first() {
        let mut host = WindowHost::new();
        let lower = host.add_window(window_at(Rectangle::new(0, 0, 10, 10))).unwrap();
        let upper = host.add_window(window_at(Rectangle::new(5, 5, 15, 15))).unwrap();
        assert_eq!(host.ids(), vec![lower, upper]);
        assert_eq!(host.layers().len(), 2);
        assert!(host.handle_event(&press(6, 6)));
        assert!(host.handle_event(&press(1, 1)));
        assert!(!host.handle_event(&press(30, 30)));
    }

    #[test]
    fn window_cannot_be_added_twice_with_a_close_function() {
        let mut host = WindowHost::new();
        let mut window = window_at(Rectangle::new(0, 0, 4, 4));
        window.set_close_function(|| {}).unwrap();
        assert_eq!(
            host.add_window(window),
            Err(WindowError::CloseFunctionAlreadySet)
        );
        assert!(host.is_empty());
    }

    #[test]
    fn close_window_removes_window_and_layer() {
        let mut host = WindowHost::new();
        let id = host.add_window(window_at(Rectangle::new(0, 0, 4, 4))).unwrap();
        host.close_window(id);
        assert!(host.is_empty());
        assert!(host.layers().is_empty());
        assert!(host.window(id).is_none());
    }
}
