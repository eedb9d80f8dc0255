//! # OvalKit
//!
//! Touch-handle interaction model for elliptical photo-filter regions
//! (vignettes and similar radial effects).
//!
//! ## Architecture
//!
//! OvalKit is organized as a workspace with multiple crates:
//!
//! 1. **ovalkit-core** - Points, rectangles, constants, errors
//! 2. **ovalkit-control** - Transform, handles, drag rules, controller, overlay
//! 3. **ovalkit-settings** - Control configuration (JSON/TOML)
//! 4. **ovalkit** - This crate: re-exports, logging setup, gesture replay
//!
//! ## Features
//!
//! - **Nine handles**: center plus eight compass points, nearest-handle picking
//! - **Screen/image mapping**: any invertible 2D affine transform
//! - **Drag rules**: rigid move, per-axis resize, uniform diagonal scaling
//! - **Overlay geometry**: outline, tick arcs, markers and center dot for renderers
//! - **Gesture replay**: re-run recorded touch sequences from JSON

pub mod replay;

pub use ovalkit_control::{
    AffineTransform, ArcTick, CenterDot, DragSession, DragState, Ellipse, EllipseControl, Handle,
    HandleSet, Oval, Overlay,
};
pub use ovalkit_core::{constants, ControlError, Error, Point, Rect, Result};
pub use ovalkit_settings::{ConfigFormat, ControlConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log filter from `RUST_LOG`, or `info` when it is unset or unparsable.
fn env_filter() -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for command results
/// - RUST_LOG environment variable support (INFO by default)
/// - JSON lines instead of pretty output when `OVALKIT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = env_filter();

    let json = std::env::var("OVALKIT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
