//! Shared component rendering context
//!
//! `ComponentContext` carries window state that row components may need
//! during rendering and event handling, so the component trait stays stable
//! and components do not rely on ad-hoc boolean parameters.

/// Context passed to `Component` trait methods describing window state.
///
/// - `focused`: the pointer is inside the window's active input region.
/// - `dragging`: the window is being moved by its title bar.
/// - `modal`: the window blocks input to everything beneath it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
    dragging: bool,
    modal: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            dragging: false,
            modal: false,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn dragging(&self) -> bool {
        self.dragging
    }

    pub const fn modal(&self) -> bool {
        self.modal
    }

    pub const fn with_dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub const fn with_modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }
}
