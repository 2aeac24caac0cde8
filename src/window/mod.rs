//! Floating windows: an optional title bar over a content area, moved by
//! dragging the title bar and resized from the right and bottom edges.
//!
//! A [`Window`] is updated once per frame through [`Window::render`], which
//! samples the pointer, advances the active gesture, enforces the size
//! constraint and draws. Button presses and releases arrive through
//! [`Window::handle_event`]. Completed gestures are reported once, on release,
//! through the move and resize handlers given in [`WindowConfig`].

pub mod config;
pub mod constraint;
pub mod event;
pub mod gesture;
pub mod host;
pub mod init;

pub use config::WindowConfig;
pub use constraint::SizeConstraint;
pub use event::{Broadcast, WindowMoved, WindowResized};
pub use gesture::{CompletedGesture, GestureController, GestureState, ResizeAxis, hot_zone};
pub use host::{WindowHost, WindowId};
pub use init::DeferredInit;

use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::components::{Component, ComponentContext};
use crate::constants::WINDOW_LAYER_LABEL;
use crate::error::WindowError;
use crate::geometry::{Point, Rectangle};
use crate::input::{
    CursorShape, CursorShapeSetter, EventTypes, InputLayer, InputLayers, LayerId, PointerSource,
};
use crate::layout::{Container, RowData};
use crate::ui::{DeferredRenders, UiFrame};

type CloseFn = Box<dyn Fn()>;

/// Collaborators a window reads from (and reports to) while rendering a frame.
pub struct FrameContext<'a> {
    pub pointer: &'a dyn PointerSource,
    pub layers: &'a InputLayers,
    pub cursor: &'a mut dyn CursorShapeSetter,
}

pub struct Window {
    move_event: Broadcast<WindowMoved>,
    resize_event: Broadcast<WindowResized>,
    modal: bool,
    draggable: bool,
    resizeable: bool,
    close_on_click_out: bool,
    constraint: SizeConstraint,
    title_height: Option<u16>,
    container: Container,
    gesture: GestureController,
    layer: Option<LayerId>,
    close_fn: Option<CloseFn>,
    cursor: CursorShape,
    press_captured: bool,
}

impl Window {
    pub fn new(config: WindowConfig) -> Result<Self, WindowError> {
        let WindowConfig {
            contents,
            title_bar,
            modal,
            draggable,
            resizeable,
            close_on_click_out,
            constraint,
            move_handlers,
            resize_handlers,
            initializers,
        } = config;

        let Some(contents) = contents else {
            tracing::warn!("rejected window config without contents");
            return Err(WindowError::MissingContents);
        };
        if matches!(title_bar, Some((_, 0))) {
            tracing::warn!("rejected window config with a zero-height title bar");
            return Err(WindowError::MissingTitleHeight);
        }
        if let Err(err) = constraint.validate() {
            tracing::warn!(%err, "rejected window size constraint");
            return Err(err);
        }

        let title_height = title_bar.as_ref().map(|(_, height)| *height);
        if draggable && title_height.is_none() {
            tracing::debug!("draggable window has no title bar; dragging disabled");
        }

        let mut window = Self {
            move_event: Broadcast::new(),
            resize_event: Broadcast::new(),
            modal,
            draggable: draggable && title_height.is_some(),
            resizeable,
            close_on_click_out,
            constraint,
            title_height,
            container: compose_layout(contents, title_bar),
            gesture: GestureController::new(),
            layer: None,
            close_fn: None,
            cursor: CursorShape::Default,
            press_captured: false,
        };
        window.move_event.extend(move_handlers);
        window.resize_event.extend(resize_handlers);

        // The initial empty rect must satisfy a minimum size too.
        window.set_location(window.rect());

        let mut init = DeferredInit::new();
        for action in initializers {
            init.append_boxed(action)?;
        }
        init.finalize(&mut window)?;

        tracing::debug!(
            rect = ?window.rect(),
            modal,
            draggable = window.draggable,
            resizeable,
            "created window"
        );
        Ok(window)
    }

    pub fn rect(&self) -> Rectangle {
        self.container.rect()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    /// Whether a content press is held on a resizeable window, with or
    /// without an active axis.
    pub fn resize_in_progress(&self) -> bool {
        self.gesture.resize_in_progress()
    }

    /// Hot zone under the pointer as of the last rendered frame.
    pub fn hover_axis(&self) -> Option<ResizeAxis> {
        self.gesture.hover()
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn is_resizeable(&self) -> bool {
        self.resizeable
    }

    pub fn closes_on_click_out(&self) -> bool {
        self.close_on_click_out
    }

    pub fn constraint(&self) -> SizeConstraint {
        self.constraint
    }

    pub fn title_height(&self) -> Option<u16> {
        self.title_height
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor
    }

    pub fn layer_id(&self) -> Option<LayerId> {
        self.layer
    }

    pub fn relayout_pending(&self) -> bool {
        self.container.relayout_pending()
    }

    pub fn layout_passes(&self) -> usize {
        self.container.layout_passes()
    }

    /// Laid-out rectangles of the title (if any) and content rows.
    pub fn row_rects(&mut self) -> Vec<Rectangle> {
        self.container.row_rects()
    }

    /// Move and resize the window. The size is clamped to the configured
    /// minimum and maximum; the origin is kept as given.
    pub fn set_location(&mut self, rect: Rectangle) {
        let clamped = self.constraint.clamp(rect);
        self.container.set_location(clamped);
    }

    pub fn request_relayout(&mut self) {
        self.container.request_relayout();
    }

    /// Install the callback that removes this window from its owner.
    pub fn set_close_function<F>(&mut self, close: F) -> Result<(), WindowError>
    where
        F: Fn() + 'static,
    {
        if self.close_fn.is_some() {
            return Err(WindowError::CloseFunctionAlreadySet);
        }
        self.close_fn = Some(Box::new(close));
        Ok(())
    }

    /// Ask the owner to close this window. Does nothing until the owner has
    /// installed a close function.
    pub fn close(&self) {
        match &self.close_fn {
            Some(close) => {
                tracing::debug!(rect = ?self.rect(), "closing window");
                close();
            }
            None => tracing::trace!("close requested before a close function was set"),
        }
    }

    /// Elevate the window into its own exclusive input layer. A modal window's
    /// layer covers the whole screen.
    pub fn setup_input_layer(&mut self, layers: &mut InputLayers) -> LayerId {
        self.teardown_input_layer(layers);
        let rect = self.container.rect_handle();
        let id = layers.push(InputLayer {
            debug_label: WINDOW_LAYER_LABEL,
            event_types: EventTypes::ALL,
            block_lower: true,
            full_screen: self.modal,
            rect_fn: Box::new(move || rect.get()),
        });
        self.layer = Some(id);
        id
    }

    pub fn teardown_input_layer(&mut self, layers: &mut InputLayers) {
        if let Some(id) = self.layer.take() {
            layers.remove(id);
        }
    }

    /// Whether the window's input region covers `point`.
    pub fn hit_test(&self, point: Point) -> bool {
        self.modal || self.rect().contains(point)
    }

    fn input_active_for(&self, point: Point, types: EventTypes, layers: &InputLayers) -> bool {
        match self.layer {
            Some(id) => layers.active_for(id, point, types),
            None => self.hit_test(point),
        }
    }

    fn title_region(&mut self) -> Option<Rectangle> {
        self.title_height?;
        self.container.row_rect(0)
    }

    fn content_region(&mut self) -> Option<Rectangle> {
        let index = self.container.row_count().checked_sub(1)?;
        self.container.row_rect(index)
    }

    fn component_context(&self, focused: bool) -> ComponentContext {
        ComponentContext::new(focused)
            .with_dragging(self.gesture.state().is_dragging())
            .with_modal(self.modal)
    }

    /// Route a terminal event to the window. Returns `true` when the window
    /// captured it.
    pub fn handle_event(&mut self, event: &Event, layers: &InputLayers) -> bool {
        let Event::Mouse(mouse) = event else {
            let ctx = self.component_context(false);
            return self.container.handle_event(event, &ctx);
        };
        let point = Point::from_cell(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.input_active_for(point, EventTypes::MOUSE_BUTTON, layers) {
                    return false;
                }
                self.press_captured = true;
                self.begin_gesture(point);
                let ctx = self.component_context(true);
                self.container.handle_event(event, &ctx);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let captured = std::mem::take(&mut self.press_captured);
                let completed = self.gesture.release();
                if let Some(gesture) = completed {
                    self.fire_completed(gesture);
                }
                if captured {
                    let inside = self.rect().contains(point);
                    let ctx = self.component_context(inside);
                    self.container.handle_event(event, &ctx);
                    self.on_container_released(inside);
                }
                captured || completed.is_some()
            }
            _ => {
                if !self.input_active_for(point, EventTypes::of(event), layers) {
                    return false;
                }
                let ctx = self.component_context(true);
                self.container.handle_event(event, &ctx);
                true
            }
        }
    }

    fn begin_gesture(&mut self, point: Point) {
        if self.draggable && self.title_region().is_some_and(|title| title.contains(point)) {
            if self.gesture.begin_drag(point) {
                tracing::debug!(?point, "window drag started");
            }
            return;
        }
        // Any content press starts a resize; the hover test picks the axis.
        if self.resizeable
            && self
                .content_region()
                .is_some_and(|content| content.contains(point))
            && self.gesture.begin_resize(point, self.rect())
        {
            tracing::debug!(?point, axis = ?self.gesture.hover(), "window resize started");
        }
    }

    fn fire_completed(&mut self, gesture: CompletedGesture) {
        let rect = self.rect();
        tracing::debug!(?gesture, ?rect, "window gesture completed");
        match gesture {
            CompletedGesture::Move => {
                let mut event = std::mem::take(&mut self.move_event);
                event.fire(self, &WindowMoved { rect });
                self.move_event = event;
            }
            CompletedGesture::Resize => {
                let mut event = std::mem::take(&mut self.resize_event);
                event.fire(self, &WindowResized { rect });
                self.resize_event = event;
            }
        }
    }

    /// Release handler for a click the window captured; `inside` tells whether
    /// the release landed within the window's drawn bounds.
    pub(crate) fn on_container_released(&self, inside: bool) {
        if self.close_on_click_out && !inside {
            self.close();
        }
    }

    /// Per-frame update and draw.
    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        deferred: &mut DeferredRenders,
        ctx: &mut FrameContext<'_>,
    ) {
        let pointer = ctx.pointer.cursor_position();

        if let Some(next) = self.gesture.step(pointer, self.rect()) {
            self.set_location(next);
            self.request_relayout();
        }

        let focused = self.input_active_for(pointer, EventTypes::ALL, ctx.layers);
        if self.resizeable {
            self.gesture.update_hover(pointer, self.rect(), focused);
            let axis = self
                .gesture
                .state()
                .resize_axis()
                .or(self.gesture.hover());
            self.apply_cursor(axis, ctx.cursor);
            if let Some(axis) = axis {
                let rect = self.rect();
                deferred.push(move |frame| render_resize_edge(frame, rect, axis));
            }
        }

        let component_ctx = self.component_context(focused);
        self.container.render(frame, &component_ctx);
    }

    fn apply_cursor(&mut self, axis: Option<ResizeAxis>, cursor: &mut dyn CursorShapeSetter) {
        let shape = match axis {
            Some(ResizeAxis::Width) => CursorShape::EwResize,
            Some(ResizeAxis::Height) => CursorShape::NsResize,
            None => CursorShape::Default,
        };
        // Only touch the shared cursor on change so idle windows do not reset
        // a shape another window just set.
        if shape != self.cursor {
            cursor.set_cursor_shape(shape);
            self.cursor = shape;
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("rect", &self.rect())
            .field("modal", &self.modal)
            .field("draggable", &self.draggable)
            .field("resizeable", &self.resizeable)
            .field("close_on_click_out", &self.close_on_click_out)
            .field("constraint", &self.constraint)
            .field("title_height", &self.title_height)
            .field("gesture", &self.gesture.state())
            .field("layer", &self.layer)
            .finish()
    }
}

/// Title bar over stretching contents, or the contents alone.
fn compose_layout(
    contents: Box<dyn Component>,
    title_bar: Option<(Box<dyn Component>, u16)>,
) -> Container {
    let mut container = Container::new();
    if let Some((title_bar, height)) = title_bar {
        container.add_row(title_bar, RowData::fixed(height));
    }
    container.add_row(contents, RowData::stretch());
    container
}

/// Highlight the edge that a resize gesture moves.
fn render_resize_edge(frame: &mut UiFrame<'_>, rect: Rectangle, axis: ResizeAxis) {
    let edge = match axis {
        ResizeAxis::Width => Rectangle::new(rect.max().x.saturating_sub(1), rect.min().y, rect.max().x, rect.max().y),
        ResizeAxis::Height => Rectangle::new(rect.min().x, rect.max().y.saturating_sub(1), rect.max().x, rect.max().y),
    };
    let symbol = match axis {
        ResizeAxis::Width => "║",
        ResizeAxis::Height => "═",
    };
    let Some(visible) = edge.visible(frame.area()) else {
        return;
    };
    let buffer = frame.buffer_mut();
    for y in visible.y..visible.y.saturating_add(visible.height) {
        for x in visible.x..visible.x.saturating_add(visible.width) {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(symbol);
            }
        }
    }
}
