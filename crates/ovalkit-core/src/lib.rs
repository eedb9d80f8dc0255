//! # OvalKit Core
//!
//! Core types shared by the OvalKit crates:
//! - [`Point`] and [`Rect`] in image or screen space
//! - The unified [`Error`] type and its [`Result`] alias
//! - Interaction constants (touch radius, default ellipse size)

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{ControlError, Error, Result};
pub use geometry::{Point, Rect};
