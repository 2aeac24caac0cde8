//! Pointer gesture state machine for floating windows.
//!
//! `Idle -> Dragging -> Idle` moves the window by the pointer delta between
//! consecutive frames. A press in the content area of a resizeable window
//! starts a resize. While it lasts, the hover test picks the active axis every
//! frame and the matching edge follows the pointer delta since the press.
//! Outside the hot zones no axis is active and the edges stay put.

use crate::constants::RESIZE_HOT_ZONE;
use crate::geometry::{Point, Rectangle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    ResizingWidth,
    ResizingHeight,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(
            self,
            GestureState::ResizingWidth | GestureState::ResizingHeight
        )
    }

    pub fn resize_axis(&self) -> Option<ResizeAxis> {
        match self {
            GestureState::ResizingWidth => Some(ResizeAxis::Width),
            GestureState::ResizingHeight => Some(ResizeAxis::Height),
            GestureState::Idle | GestureState::Dragging => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAxis {
    Width,
    Height,
}

impl From<ResizeAxis> for GestureState {
    fn from(axis: ResizeAxis) -> Self {
        match axis {
            ResizeAxis::Width => GestureState::ResizingWidth,
            ResizeAxis::Height => GestureState::ResizingHeight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedGesture {
    Move,
    Resize,
}

/// Resize axis armed by hovering `pointer` over `rect`'s edges.
///
/// The right-edge zone wins over the bottom-edge zone in the corner.
pub fn hot_zone(rect: Rectangle, pointer: Point) -> Option<ResizeAxis> {
    let min = rect.min();
    let max = rect.max();
    let right = Rectangle::new(max.x.saturating_sub(RESIZE_HOT_ZONE), min.y, max.x, max.y);
    let bottom = Rectangle::new(min.x, max.y.saturating_sub(RESIZE_HOT_ZONE), max.x, max.y);
    if right.contains(pointer) {
        Some(ResizeAxis::Width)
    } else if bottom.contains(pointer) {
        Some(ResizeAxis::Height)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Dragging,
    /// Press held in the content area; the axis follows the hover test.
    Resizing(Option<ResizeAxis>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureController {
    phase: Phase,
    last_sample: Point,
    start_sample: Point,
    /// Max corner of the window when the resize began.
    start_extent: Point,
    hover: Option<ResizeAxis>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported state. A resize with no active axis reads as `Idle`.
    pub fn state(&self) -> GestureState {
        match self.phase {
            Phase::Idle | Phase::Resizing(None) => GestureState::Idle,
            Phase::Dragging => GestureState::Dragging,
            Phase::Resizing(Some(axis)) => axis.into(),
        }
    }

    /// Whether a press is being tracked as a drag or a resize.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn resize_in_progress(&self) -> bool {
        matches!(self.phase, Phase::Resizing(_))
    }

    pub fn hover(&self) -> Option<ResizeAxis> {
        self.hover
    }

    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = Phase::Dragging;
        self.start_sample = pointer;
        self.last_sample = pointer;
        true
    }

    /// Start a resize from a content press at `pointer`. The axis starts as
    /// whatever hot zone the press landed in, if any.
    pub fn begin_resize(&mut self, pointer: Point, rect: Rectangle) -> bool {
        if self.is_active() {
            return false;
        }
        let axis = hot_zone(rect, pointer);
        self.hover = axis;
        self.phase = Phase::Resizing(axis);
        self.start_sample = pointer;
        self.last_sample = pointer;
        self.start_extent = rect.max();
        true
    }

    pub fn release(&mut self) -> Option<CompletedGesture> {
        let completed = match self.phase {
            Phase::Idle => None,
            Phase::Dragging => Some(CompletedGesture::Move),
            Phase::Resizing(_) => Some(CompletedGesture::Resize),
        };
        self.phase = Phase::Idle;
        completed
    }

    /// Geometry for this frame, or `None` when nothing changes.
    pub fn step(&mut self, pointer: Point, rect: Rectangle) -> Option<Rectangle> {
        let next = match self.phase {
            Phase::Idle | Phase::Resizing(None) => return None,
            Phase::Dragging => {
                if pointer == self.last_sample {
                    return None;
                }
                rect.translate(pointer - self.last_sample)
            }
            Phase::Resizing(Some(_)) if pointer == self.start_sample => return None,
            Phase::Resizing(Some(ResizeAxis::Width)) => rect.with_max_x(
                self.start_extent
                    .x
                    .saturating_sub(self.start_sample.x.saturating_sub(pointer.x)),
            ),
            Phase::Resizing(Some(ResizeAxis::Height)) => rect.with_max_y(
                self.start_extent
                    .y
                    .saturating_sub(self.start_sample.y.saturating_sub(pointer.y)),
            ),
        };
        self.last_sample = pointer;
        (next != rect).then_some(next)
    }

    /// Re-run the hover test. `in_region` tells whether the pointer is inside
    /// the window's active input region; outside it nothing is hovered. While
    /// resizing, the result becomes the active axis.
    pub fn update_hover(
        &mut self,
        pointer: Point,
        rect: Rectangle,
        in_region: bool,
    ) -> Option<ResizeAxis> {
        let hover = if in_region {
            hot_zone(rect, pointer)
        } else {
            None
        };
        self.hover = hover;
        if let Phase::Resizing(axis) = &mut self.phase {
            *axis = hover;
        }
        hover
    }
}
