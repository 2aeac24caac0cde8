use crossterm::event::Event;

use crate::geometry::Point;
use crate::input::PointerSource;

/// Tracks the last reported pointer position from terminal mouse events.
///
/// Terminals push mouse events, while windows poll the pointer once per frame;
/// this bridges the two.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    position: Point,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: &Event) {
        let Event::Mouse(mouse) = event else {
            return;
        };
        self.position = Point::from_cell(mouse.column, mouse.row);
    }
}

impl PointerSource for PointerState {
    fn cursor_position(&self) -> Point {
        self.position
    }
}
