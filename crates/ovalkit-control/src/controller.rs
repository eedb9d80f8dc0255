use ovalkit_core::{ControlError, Point, Result};
use ovalkit_settings::ControlConfig;
use tracing::{debug, warn};

use crate::drag::{DragSession, DragState};
use crate::ellipse::{Ellipse, Oval};
use crate::handles::{Handle, HandleSet};
use crate::overlay::Overlay;
use crate::transform::AffineTransform;

/// Interactive ellipse control.
///
/// Holds the ellipse being displayed, the cached handle positions, the
/// screen-to-image transform supplied by the hosting view and the state of
/// the current gesture.
///
/// # Gesture model
///
/// ```text
/// Idle --action_down--> Dragging --action_up--> Idle
///                          |  ^
///                          +--+ action_move
/// ```
///
/// The host picks the handle with [`EllipseControl::close_handle`] on
/// touch-down and passes it to every [`EllipseControl::action_move`]. Calls
/// are expected to be serialized; the control performs no locking.
#[derive(Debug, Clone)]
pub struct EllipseControl {
    config: ControlConfig,
    center: Option<Point>,
    rx: f64,
    ry: f64,
    handles: Option<HandleSet>,
    screen_to_image: Option<AffineTransform>,
    state: DragState,
}

impl EllipseControl {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            rx: config.default_radius_x,
            ry: config.default_radius_y,
            config,
            center: None,
            handles: None,
            screen_to_image: None,
            state: DragState::Idle,
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn set_radius(&mut self, rx: f64, ry: f64) {
        self.rx = rx;
        self.ry = ry;
    }

    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center = Some(Point::new(x, y));
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn radius(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    /// The displayed ellipse, once a center has been set.
    pub fn ellipse(&self) -> Option<Ellipse> {
        self.center.map(|c| Ellipse::new(c, self.rx, self.ry))
    }

    pub fn set_screen_to_image(&mut self, transform: AffineTransform) {
        self.screen_to_image = Some(transform);
    }

    /// Sets the screen-to-image transform from the image-to-screen one the
    /// view usually has at hand.
    pub fn set_image_to_screen(&mut self, transform: &AffineTransform) -> Result<()> {
        self.screen_to_image = Some(transform.invert()?);
        Ok(())
    }

    pub fn screen_to_image(&self) -> Option<&AffineTransform> {
        self.screen_to_image.as_ref()
    }

    /// Recomputes and caches the handle positions for the given geometry.
    ///
    /// The positions stay in whatever space `center` and the radii are in;
    /// [`EllipseControl::close_handle`] must be queried in that same space.
    pub fn fill_handles(&mut self, center: Point, rx: f64, ry: f64) -> &HandleSet {
        self.handles.insert(HandleSet::fill(center, rx, ry))
    }

    /// Fills the handles from the control's own ellipse. Does nothing while
    /// no center has been set.
    pub fn refresh_handles(&mut self) -> Option<&HandleSet> {
        let center = self.center?;
        Some(self.fill_handles(center, self.rx, self.ry))
    }

    pub fn handles(&self) -> Option<&HandleSet> {
        self.handles.as_ref()
    }

    /// The handle within the touch radius of `(x, y)`, if any.
    pub fn close_handle(&self, x: f64, y: f64) -> Option<Handle> {
        let handles = self.handles.as_ref()?;
        handles.closest(Point::new(x, y), self.config.touch_threshold_squared())
    }

    /// Touch-down: starts a drag session against `oval`.
    pub fn action_down<O: Oval + ?Sized>(&mut self, x: f64, y: f64, oval: &O) -> Result<()> {
        let transform = self.screen_to_image.ok_or(ControlError::MissingTransform)?;
        if self.state.is_dragging() {
            warn!("Touch-down during an active drag, restarting the session");
        }
        self.state = DragState::Dragging(DragSession::begin(transform, Point::new(x, y), oval));
        Ok(())
    }

    /// Touch-move: drags `handle` to `(x, y)` and updates `oval`.
    pub fn action_move<O: Oval + ?Sized>(
        &mut self,
        handle: Handle,
        x: f64,
        y: f64,
        oval: &mut O,
    ) -> Result<()> {
        let session = self.state.session().ok_or(ControlError::NoActiveDrag)?;
        session.update(handle, Point::new(x, y), oval);
        Ok(())
    }

    /// Touch-up: ends the drag session, if any.
    pub fn action_up(&mut self) {
        if self.state.is_dragging() {
            debug!("Drag finished");
        }
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    /// Decoration geometry for the displayed ellipse.
    pub fn overlay(&self) -> Option<Overlay> {
        self.ellipse()
            .map(|ellipse| Overlay::compute(&ellipse, &self.config))
    }
}

impl Default for EllipseControl {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}
