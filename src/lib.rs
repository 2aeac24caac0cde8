//! Floating windows for `ratatui` terminal UIs.
//!
//! A [`window::Window`] stacks an optional title bar over arbitrary
//! [`components::Component`] contents. It moves when its title bar is
//! dragged, resizes from its right and bottom edges within optional size
//! bounds, can be modal, and can close itself when a click is released
//! outside it. [`window::WindowHost`] owns a stack of windows and routes
//! input and rendering to them.

pub mod component_context;
pub mod components;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use error::WindowError;
