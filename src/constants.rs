//! Shared crate-wide constants.

/// Width (in cells) of the hover zone along the right and bottom window edges
/// that arms a resize gesture.
pub const RESIZE_HOT_ZONE: i32 = 6;

/// Debug label attached to the input layer a window elevates itself into.
pub const WINDOW_LAYER_LABEL: &str = "window";

/// Default frame interval for the demo render loop.
pub const DEFAULT_FPS: u32 = 60;
