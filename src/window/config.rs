use super::Window;
use super::constraint::SizeConstraint;
use super::event::{Handler, WindowMoved, WindowResized};
use crate::components::Component;
use crate::error::WindowError;
use crate::geometry::{Rectangle, Size};

pub(crate) type Initializer = Box<dyn FnOnce(&mut Window)>;

/// Construction-time options for a [`Window`].
///
/// Options are recorded as given; validation happens once, in
/// [`Window::new`].
#[derive(Default)]
pub struct WindowConfig {
    pub(crate) contents: Option<Box<dyn Component>>,
    pub(crate) title_bar: Option<(Box<dyn Component>, u16)>,
    pub(crate) modal: bool,
    pub(crate) draggable: bool,
    pub(crate) resizeable: bool,
    pub(crate) close_on_click_out: bool,
    pub(crate) constraint: SizeConstraint,
    pub(crate) move_handlers: Vec<Handler<WindowMoved>>,
    pub(crate) resize_handlers: Vec<Handler<WindowResized>>,
    pub(crate) initializers: Vec<Initializer>,
}

impl WindowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The body of the window. Required.
    pub fn contents(mut self, contents: impl Component + 'static) -> Self {
        self.contents = Some(Box::new(contents));
        self
    }

    /// Title bar component and its fixed height in rows.
    pub fn title_bar(mut self, title_bar: impl Component + 'static, height: u16) -> Self {
        self.title_bar = Some((Box::new(title_bar), height));
        self
    }

    /// Block input to everything beneath the window.
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    /// Move the window by dragging its title bar. Ignored without a title bar.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Resize the window from its right and bottom edges.
    pub fn resizeable(mut self, resizeable: bool) -> Self {
        self.resizeable = resizeable;
        self
    }

    pub fn min_size(mut self, width: i32, height: i32) -> Self {
        self.constraint.min = Some(Size::new(width, height));
        self
    }

    pub fn max_size(mut self, width: i32, height: i32) -> Self {
        self.constraint.max = Some(Size::new(width, height));
        self
    }

    /// Close the window when a click that it captured is released outside it.
    pub fn close_on_click_out(mut self, close: bool) -> Self {
        self.close_on_click_out = close;
        self
    }

    pub fn move_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Window, &WindowMoved) + 'static,
    {
        self.move_handlers.push(Box::new(handler));
        self
    }

    pub fn resize_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Window, &WindowResized) + 'static,
    {
        self.resize_handlers.push(Box::new(handler));
        self
    }

    /// Initial size and position, subject to the size constraint.
    pub fn location(self, rect: Rectangle) -> Self {
        self.after_init(move |window| window.set_location(rect))
    }

    /// Run `action` once the window is fully constructed.
    pub fn after_init<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Window) + 'static,
    {
        self.initializers.push(Box::new(action));
        self
    }

    pub fn build(self) -> Result<Window, WindowError> {
        Window::new(self)
    }
}

impl std::fmt::Debug for WindowConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowConfig")
            .field("contents", &self.contents.is_some())
            .field("title_height", &self.title_bar.as_ref().map(|(_, h)| *h))
            .field("modal", &self.modal)
            .field("draggable", &self.draggable)
            .field("resizeable", &self.resizeable)
            .field("close_on_click_out", &self.close_on_click_out)
            .field("constraint", &self.constraint)
            .field("initializers", &self.initializers.len())
            .finish()
    }
}
