//! Input layers: stacked, optionally exclusive hit regions.
//!
//! Layers are kept in elevation order; the last pushed layer is on top. A
//! layer is *active* for a point when it is the topmost layer that accepts the
//! event type there, or when every layer above it that accepts the point lets
//! input through (`block_lower == false`).

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crossterm::event::{Event, MouseEventKind};

use crate::geometry::{Point, Rectangle};

/// Categories of input a layer captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventTypes(u8);

impl EventTypes {
    pub const NONE: EventTypes = EventTypes(0);
    pub const MOUSE_BUTTON: EventTypes = EventTypes(1 << 0);
    pub const MOUSE_MOVE: EventTypes = EventTypes(1 << 1);
    pub const SCROLL: EventTypes = EventTypes(1 << 2);
    pub const ALL: EventTypes =
        EventTypes(Self::MOUSE_BUTTON.0 | Self::MOUSE_MOVE.0 | Self::SCROLL.0);

    /// Check if any of the given types are set.
    pub fn intersects(&self, other: EventTypes) -> bool {
        (self.0 & other.0) != 0
    }

    /// Pointer category of a terminal event; `NONE` for non-pointer events.
    pub fn of(event: &Event) -> EventTypes {
        let Event::Mouse(mouse) = event else {
            return EventTypes::NONE;
        };
        match mouse.kind {
            MouseEventKind::Down(_) | MouseEventKind::Up(_) => EventTypes::MOUSE_BUTTON,
            MouseEventKind::Drag(_) | MouseEventKind::Moved => EventTypes::MOUSE_MOVE,
            MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => EventTypes::SCROLL,
        }
    }
}

impl BitOr for EventTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        EventTypes(self.0 | rhs.0)
    }
}

impl BitOrAssign for EventTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EventTypes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        EventTypes(self.0 & rhs.0)
    }
}

pub type RectProvider = Box<dyn Fn() -> Rectangle>;

pub struct InputLayer {
    pub debug_label: &'static str,
    pub event_types: EventTypes,
    pub block_lower: bool,
    pub full_screen: bool,
    /// Queried on every hit test so the region tracks the owner's geometry.
    pub rect_fn: RectProvider,
}

impl InputLayer {
    pub fn hit_test(&self, point: Point) -> bool {
        self.full_screen || (self.rect_fn)().contains(point)
    }

    fn accepts(&self, point: Point, types: EventTypes) -> bool {
        self.event_types.intersects(types) && self.hit_test(point)
    }
}

impl std::fmt::Debug for InputLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputLayer")
            .field("debug_label", &self.debug_label)
            .field("event_types", &self.event_types)
            .field("block_lower", &self.block_lower)
            .field("full_screen", &self.full_screen)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

#[derive(Debug, Default)]
pub struct InputLayers {
    layers: Vec<(LayerId, InputLayer)>,
    next_id: u64,
}

impl InputLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elevate `layer` above every existing layer.
    pub fn push(&mut self, layer: InputLayer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        tracing::debug!(
            layer = ?id,
            label = layer.debug_label,
            full_screen = layer.full_screen,
            "elevated input layer"
        );
        self.layers.push((id, layer));
        id
    }

    pub fn remove(&mut self, id: LayerId) -> Option<InputLayer> {
        let index = self.layers.iter().position(|(layer_id, _)| *layer_id == id)?;
        Some(self.layers.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn active_for(&self, id: LayerId, point: Point, types: EventTypes) -> bool {
        for (layer_id, layer) in self.layers.iter().rev() {
            if !layer.accepts(point, types) {
                if *layer_id == id {
                    return false;
                }
                continue;
            }
            if *layer_id == id {
                return true;
            }
            if layer.block_lower {
                return false;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(rect: Rectangle, block_lower: bool, full_screen: bool) -> InputLayer {
        InputLayer {
            debug_label: "test",
            event_types: EventTypes::ALL,
            block_lower,
            full_screen,
            rect_fn: Box::new(move || rect),
        }
    }

    #[test]
    fn event_types_combine() {
        let mask = EventTypes::MOUSE_BUTTON | EventTypes::SCROLL;
        assert!(mask.intersects(EventTypes::SCROLL));
        assert!(!mask.intersects(EventTypes::MOUSE_MOVE));
        assert!(EventTypes::ALL.intersects(mask));
        assert_eq!(mask & EventTypes::SCROLL, EventTypes::SCROLL);
    }

    #[test]
    fn topmost_blocking_layer_wins() {
        let mut layers = InputLayers::new();
        let lower = layers.push(layer(Rectangle::new(0, 0, 10, 10), true, false));
        let upper = layers.push(layer(Rectangle::new(5, 5, 15, 15), true, false));
        let p = Point::new(6, 6);
        assert!(layers.active_for(upper, p, EventTypes::ALL));
        assert!(!layers.active_for(lower, p, EventTypes::ALL));
        assert!(layers.active_for(lower, Point::new(1, 1), EventTypes::ALL));
    }

    #[test]
    fn non_blocking_layer_lets_input_through() {
        let mut layers = InputLayers::new();
        let lower = layers.push(layer(Rectangle::new(0, 0, 10, 10), true, false));
        layers.push(layer(Rectangle::new(0, 0, 10, 10), false, false));
        assert!(layers.active_for(lower, Point::new(2, 2), EventTypes::ALL));
    }

    #[test]
    fn full_screen_layer_covers_everything() {
        let mut layers = InputLayers::new();
        let lower = layers.push(layer(Rectangle::new(0, 0, 10, 10), true, false));
        let modal = layers.push(layer(Rectangle::new(50, 50, 60, 60), true, true));
        for p in [Point::new(-5, -5), Point::new(2, 2), Point::new(1000, 3)] {
            assert!(layers.active_for(modal, p, EventTypes::ALL));
            assert!(!layers.active_for(lower, p, EventTypes::ALL));
        }
    }

    #[test]
    fn removed_layer_is_never_active() {
        let mut layers = InputLayers::new();
        let id = layers.push(layer(Rectangle::new(0, 0, 10, 10), true, false));
        assert!(layers.remove(id).is_some());
        assert!(layers.is_empty());
        assert!(!layers.active_for(id, Point::new(1, 1), EventTypes::ALL));
    }

    #[test]
    fn event_type_mask_filters_layers() {
        let mut layers = InputLayers::new();
        let lower = layers.push(layer(Rectangle::new(0, 0, 10, 10), true, false));
        let mut scroll_only = layer(Rectangle::new(0, 0, 10, 10), true, false);
        scroll_only.event_types = EventTypes::SCROLL;
        layers.push(scroll_only);
        assert!(layers.active_for(lower, Point::new(1, 1), EventTypes::MOUSE_BUTTON));
        assert!(!layers.active_for(lower, Point::new(1, 1), EventTypes::SCROLL));
    }
}
