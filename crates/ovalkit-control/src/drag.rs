//! Drag sessions.
//!
//! A [`DragSession`] is created on touch-down and lives until touch-up. It
//! remembers where the finger landed (in image space) and what the ellipse
//! looked like at that moment. Every move event is resolved against that
//! snapshot so the grabbed part of the ellipse keeps its offset to the finger
//! instead of jumping under it.
//!
//! # Update rules
//!
//! - **Center**: rigid translation keeping the initial finger-to-center offset.
//! - **North/South**: vertical radius follows the finger, corrected by how far
//!   inside the edge the finger grabbed.
//! - **East/West**: the same rule on the horizontal radius.
//! - **Diagonals**: uniform scaling of both radii by one factor derived from
//!   the Manhattan distance between finger and center.

use std::f64::consts::FRAC_1_SQRT_2;

use ovalkit_core::Point;
use tracing::{debug, trace};

use crate::ellipse::{Ellipse, Oval};
use crate::handles::Handle;
use crate::transform::AffineTransform;

/// `sin 45°`: ratio between a diagonal handle's Manhattan distance from the
/// center and `rx + ry`.
const DIAGONAL_FACTOR: f64 = FRAC_1_SQRT_2;

/// State captured at touch-down for one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    screen_to_image: AffineTransform,
    anchor: Point,
    start: Ellipse,
}

impl DragSession {
    /// Starts a drag at `screen_point`, snapshotting `oval`.
    pub fn begin<O: Oval + ?Sized>(
        screen_to_image: AffineTransform,
        screen_point: Point,
        oval: &O,
    ) -> Self {
        let anchor = screen_to_image.map_point(screen_point);
        let start = Ellipse::from_oval(oval);
        debug!(%anchor, center = %start.center, rx = start.rx, ry = start.ry, "Drag started");
        Self {
            screen_to_image,
            anchor,
            start,
        }
    }

    /// Touch-down position in image space.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The ellipse as it was at touch-down.
    pub fn start(&self) -> &Ellipse {
        &self.start
    }

    pub fn screen_to_image(&self) -> &AffineTransform {
        &self.screen_to_image
    }

    /// Applies a move of `handle` to `screen_point`.
    pub fn update<O: Oval + ?Sized>(&self, handle: Handle, screen_point: Point, oval: &mut O) {
        let touch = self.screen_to_image.map_point(screen_point);
        trace!(%handle, %touch, "Drag update");

        match handle {
            Handle::Center => self.drag_center(touch, oval),
            Handle::North => self.drag_vertical(-1.0, touch, oval),
            Handle::South => self.drag_vertical(1.0, touch, oval),
            Handle::East => self.drag_horizontal(-1.0, touch, oval),
            Handle::West => self.drag_horizontal(1.0, touch, oval),
            Handle::NorthEast | Handle::SouthEast | Handle::SouthWest | Handle::NorthWest => {
                self.drag_diagonal(touch, oval)
            }
        }
    }

    fn drag_center<O: Oval + ?Sized>(&self, touch: Point, oval: &mut O) {
        let offset = self.anchor - self.start.center;
        oval.set_center(touch - offset);
    }

    fn drag_vertical<O: Oval + ?Sized>(&self, sign: f64, touch: Point, oval: &mut O) {
        let grab_inset = self.start.ry - (self.anchor.y - self.start.center.y).abs();
        let ry = (touch.y - oval.center().y + sign * grab_inset).abs();
        oval.set_radius_y(ry);
    }

    // Mirror of `drag_vertical`: east sits at +x where north sits at -y,
    // so the sign enters subtracted.
    fn drag_horizontal<O: Oval + ?Sized>(&self, sign: f64, touch: Point, oval: &mut O) {
        let grab_inset = self.start.rx - (self.anchor.x - self.start.center.x).abs();
        let rx = (touch.x - oval.center().x - sign * grab_inset).abs();
        oval.set_radius_x(rx);
    }

    fn drag_diagonal<O: Oval + ?Sized>(&self, touch: Point, oval: &mut O) {
        let start_magnitude = (self.start.rx + self.start.ry) * DIAGONAL_FACTOR;
        let down_rad = self.anchor.manhattan_to(&self.start.center) - start_magnitude;

        let rx = oval.radius_x();
        let ry = oval.radius_y();
        let r = (rx.abs() + ry.abs()) * DIAGONAL_FACTOR;
        if !r.is_finite() || r <= 0.0 {
            debug!(rx, ry, "Ignoring diagonal drag on a degenerate ellipse");
            return;
        }

        let nr = (touch.manhattan_to(&oval.center()) - down_rad).abs();
        let scale = nr / r;
        oval.set_radius(rx * scale, ry * scale);
    }
}

/// Gesture state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}
