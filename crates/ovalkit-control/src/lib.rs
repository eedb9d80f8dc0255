//! # OvalKit Control
//!
//! Geometric interaction model for an on-canvas ellipse editor, as used by
//! vignette-style photo filters. The host view feeds touch events in screen
//! pixels; the control maps them into image space, picks the nearest of nine
//! handles and reshapes the ellipse according to the grabbed handle.
//!
//! ## Core Components
//!
//! - **Transform**: screen/image affine mapping
//! - **Ellipse**: the edited shape and the [`Oval`] trait hosts implement
//! - **Handles**: handle identity, placement and hit-testing
//! - **Drag**: per-gesture state and the handle update rules
//! - **Controller**: [`EllipseControl`], tying the above together
//! - **Overlay**: decoration geometry for renderers
//!
//! ## Usage
//!
//! ```rust
//! use ovalkit_control::{AffineTransform, Ellipse, EllipseControl, Handle};
//! use ovalkit_core::Point;
//!
//! let mut oval = Ellipse::new(Point::new(100.0, 100.0), 200.0, 300.0);
//! let mut control = EllipseControl::default();
//! control.set_screen_to_image(AffineTransform::identity());
//! control.fill_handles(oval.center, oval.rx, oval.ry);
//!
//! let handle = control.close_handle(110.0, 105.0).unwrap();
//! assert_eq!(handle, Handle::Center);
//!
//! control.action_down(110.0, 105.0, &oval).unwrap();
//! control.action_move(handle, 130.0, 125.0, &mut oval).unwrap();
//! control.action_up();
//!
//! assert_eq!(oval.center, Point::new(120.0, 120.0));
//! ```

pub mod controller;
pub mod drag;
pub mod ellipse;
pub mod handles;
pub mod overlay;
pub mod transform;

pub use controller::EllipseControl;
pub use drag::{DragSession, DragState};
pub use ellipse::{Ellipse, Oval};
pub use handles::{Handle, HandleSet};
pub use overlay::{ArcTick, CenterDot, Overlay};
pub use transform::AffineTransform;
