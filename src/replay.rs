//! Gesture replay.
//!
//! Re-runs a recorded touch sequence against a fresh control so interaction
//! reports can be reproduced outside the app. A gesture file looks like:
//!
//! ```json
//! {
//!   "ellipse": { "center": { "x": 100.0, "y": 100.0 }, "rx": 200.0, "ry": 300.0 },
//!   "screen_to_image": { "scale_x": 0.5, "skew_x": 0.0, "trans_x": 0.0,
//!                        "skew_y": 0.0, "scale_y": 0.5, "trans_y": 0.0 },
//!   "events": [
//!     { "type": "down", "x": 200.0, "y": 200.0 },
//!     { "type": "move", "x": 260.0, "y": 240.0 },
//!     { "type": "up" }
//!   ]
//! }
//! ```
//!
//! Coordinates are view pixels. The handle for a drag is picked on touch-down
//! against the ellipse mapped into the view, unless a move names one
//! explicitly with `"handle": "North"`. A touch-down that misses every handle
//! ends any drag still in progress.

use std::path::Path;

use ovalkit_control::{AffineTransform, Ellipse, EllipseControl, Handle};
use ovalkit_core::{Error, Point, Result};
use ovalkit_settings::ControlConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One recorded touch event in view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TouchEvent {
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        handle: Option<Handle>,
    },
    Up,
}

/// A recorded gesture: starting ellipse, view mapping and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub ellipse: Ellipse,
    #[serde(default)]
    pub screen_to_image: AffineTransform,
    pub events: Vec<TouchEvent>,
}

impl Gesture {
    /// Reads a gesture from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))
    }
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub ellipse: Ellipse,
    /// Handle picked by each touch-down that landed on one
    pub handles: Vec<Handle>,
    /// Moves that arrived with no drag in progress
    pub ignored_moves: usize,
}

/// The ellipse as the view shows it. Radii are taken along the view axes,
/// which is exact for scale-and-translate mappings.
fn to_screen(ellipse: &Ellipse, image_to_screen: &AffineTransform) -> Ellipse {
    let center = image_to_screen.map_point(ellipse.center);
    let rx = image_to_screen.map_vector(Point::new(ellipse.rx, 0.0)).x.abs();
    let ry = image_to_screen.map_vector(Point::new(0.0, ellipse.ry)).y.abs();
    Ellipse::new(center, rx, ry)
}

/// Replays `gesture` and returns the final ellipse.
pub fn replay(gesture: &Gesture, config: ControlConfig) -> Result<ReplayOutcome> {
    let image_to_screen = gesture.screen_to_image.invert()?;

    let mut control = EllipseControl::new(config);
    control.set_screen_to_image(gesture.screen_to_image);

    let mut oval = gesture.ellipse;
    let mut active: Option<Handle> = None;
    let mut handles = Vec::new();
    let mut ignored_moves = 0;

    for event in &gesture.events {
        match *event {
            TouchEvent::Down { x, y } => {
                let shown = to_screen(&oval, &image_to_screen);
                control.fill_handles(shown.center, shown.rx, shown.ry);
                active = control.close_handle(x, y);
                match active {
                    Some(handle) => {
                        control.action_down(x, y, &oval)?;
                        handles.push(handle);
                        debug!(%handle, x, y, "Touch-down on handle");
                    }
                    None => {
                        control.action_up();
                        debug!(x, y, "Touch-down missed every handle");
                    }
                }
            }
            TouchEvent::Move { x, y, handle } => match handle.or(active) {
                Some(handle) if control.is_dragging() => {
                    control.action_move(handle, x, y, &mut oval)?;
                }
                _ => ignored_moves += 1,
            },
            TouchEvent::Up => {
                control.action_up();
                active = None;
            }
        }
    }

    info!(
        center = %oval.center,
        rx = oval.rx,
        ry = oval.ry,
        events = gesture.events.len(),
        "Replay finished"
    );

    Ok(ReplayOutcome {
        ellipse: oval,
        handles,
        ignored_moves,
    })
}
