//! Interaction constants.
//!
//! These are the defaults used when no configuration file overrides them.
//! All distances are in pixels.

/// Maximum distance between a touch and a handle for the handle to be picked.
pub const MIN_TOUCH_DIST: f64 = 80.0;

/// Number of handles on an ellipse: the center plus eight compass points.
pub const HANDLE_COUNT: usize = 9;

/// Horizontal radius of a freshly created control.
pub const DEFAULT_RADIUS_X: f64 = 200.0;

/// Vertical radius of a freshly created control.
pub const DEFAULT_RADIUS_Y: f64 = 300.0;

/// Radius of the dot marking the ellipse center.
pub const CENTER_DOT_SIZE: f64 = 40.0;

/// Distance of the tick arcs from the ellipse outline (inside and outside).
pub const TICK_OFFSET: f64 = 10.0;

/// Half the angular sweep of a tick arc, in degrees.
pub const TICK_HALF_SWEEP: f64 = 4.0;

/// Determinants smaller than this are treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;
