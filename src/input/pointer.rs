use crate::geometry::Point;

/// Polled pointer position, read once per frame.
pub trait PointerSource {
    fn cursor_position(&self) -> Point;
}

/// A fixed position, handy for scripted frames.
impl PointerSource for Point {
    fn cursor_position(&self) -> Point {
        *self
    }
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn cursor_position(&self) -> Point {
        (**self).cursor_position()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorShape {
    #[default]
    Default,
    /// Horizontal (east-west) resize.
    EwResize,
    /// Vertical (north-south) resize.
    NsResize,
}

impl CursorShape {
    pub fn symbol(&self) -> &'static str {
        match self {
            CursorShape::Default => "·",
            CursorShape::EwResize => "↔",
            CursorShape::NsResize => "↕",
        }
    }
}

/// Visual pointer affordance. Purely cosmetic.
pub trait CursorShapeSetter {
    fn set_cursor_shape(&mut self, shape: CursorShape);
}

/// Terminals cannot change the mouse cursor, so the plain value records the
/// last requested shape for the host to display however it likes.
impl CursorShapeSetter for CursorShape {
    fn set_cursor_shape(&mut self, shape: CursorShape) {
        *self = shape;
    }
}
