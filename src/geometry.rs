//! Signed cell geometry used by floating windows.
//!
//! Floating windows may be dragged partially off screen, so their origin is
//! signed. Conversion to a drawable `ratatui` rectangle happens only at render
//! time through [`Rectangle::visible`].

use ratatui::layout::Rect;
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Terminal mouse coordinates are unsigned column/row pairs.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: column as i32,
            y: row as i32,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_negative(&self) -> bool {
        self.width < 0 || self.height < 0
    }
}

/// Rectangle described by its min (origin) and max (exclusive) corners.
///
/// The max corner never sits before the min corner, so `width()` and
/// `height()` are never negative. Coordinate arithmetic saturates at the
/// `i32` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    min: Point,
    max: Point,
}

impl Rectangle {
    /// Build a rectangle from two corners, swapping coordinates as needed.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        let width = size.width.max(0);
        let height = size.height.max(0);
        Self {
            min: origin,
            max: Point::new(origin.x.saturating_add(width), origin.y.saturating_add(height)),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn translate(&self, delta: Point) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Move the right edge. The edge stops at the left edge.
    pub fn with_max_x(&self, x: i32) -> Self {
        Self {
            min: self.min,
            max: Point::new(x.max(self.min.x), self.max.y),
        }
    }

    /// Move the bottom edge. The edge stops at the top edge.
    pub fn with_max_y(&self, y: i32) -> Self {
        Self {
            min: self.min,
            max: Point::new(self.max.x, y.max(self.min.y)),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Portion of this rectangle that falls inside `bounds`, in buffer cells.
    pub fn visible(&self, bounds: Rect) -> Option<Rect> {
        let bounds_x0 = bounds.x as i32;
        let bounds_y0 = bounds.y as i32;
        let bounds_x1 = bounds_x0 + bounds.width as i32;
        let bounds_y1 = bounds_y0 + bounds.height as i32;
        let x0 = self.min.x.max(bounds_x0);
        let y0 = self.min.y.max(bounds_y0);
        let x1 = self.max.x.min(bounds_x1);
        let y1 = self.max.y.min(bounds_y1);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Rectangle::from_origin_size(
            Point::from_cell(rect.x, rect.y),
            Size::new(rect.width as i32, rect.height as i32),
        )
    }
}
