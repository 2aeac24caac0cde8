pub mod layer;
pub mod pointer;

pub use layer::{EventTypes, InputLayer, InputLayers, LayerId, RectProvider};
pub use pointer::{CursorShape, CursorShapeSetter, PointerSource};
