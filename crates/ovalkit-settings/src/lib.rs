//! OvalKit Settings Crate
//!
//! Handles the tunable parameters of the ellipse control: touch radius,
//! default ellipse size and overlay decoration metrics.

pub mod config;
pub mod error;

pub use config::{ConfigFormat, ControlConfig};
pub use error::{SettingsError, SettingsResult};
