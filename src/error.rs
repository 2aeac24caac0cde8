//! Errors raised while building and wiring floating windows.
//
// Runtime geometry never fails; every variant here is a contract violation
// detected at construction or registration time.

use thiserror::Error;

use crate::geometry::Size;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("window contents are required")]
    MissingContents,
    #[error("a title bar needs a non-zero height")]
    MissingTitleHeight,
    #[error("size {0:?} has a negative dimension")]
    NegativeSize(Size),
    #[error("minimum size {min:?} exceeds maximum size {max:?}")]
    InvertedSizeConstraint { min: Size, max: Size },
    #[error("deferred initializers have already run")]
    AlreadyFinalized,
    #[error("close function is already set")]
    CloseFunctionAlreadySet,
}
