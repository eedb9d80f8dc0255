use ovalkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Anything with an axis-aligned elliptical outline that a drag can edit.
///
/// Hosts usually keep the ellipse inside their own filter representation;
/// implementing this trait lets drag sessions mutate it in place.
pub trait Oval {
    fn center(&self) -> Point;
    fn radius_x(&self) -> f64;
    fn radius_y(&self) -> f64;

    fn set_center(&mut self, center: Point);
    fn set_radius_x(&mut self, rx: f64);
    fn set_radius_y(&mut self, ry: f64);

    fn set_radius(&mut self, rx: f64, ry: f64) {
        self.set_radius_x(rx);
        self.set_radius_y(ry);
    }
}

/// Axis-aligned ellipse in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Snapshot of any [`Oval`].
    pub fn from_oval<O: Oval + ?Sized>(oval: &O) -> Self {
        Self::new(oval.center(), oval.radius_x(), oval.radius_y())
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.center, self.rx, self.ry)
    }

    /// Point on the outline at `degrees`, measured clockwise from east
    /// (y grows downward).
    pub fn point_at(&self, degrees: f64) -> Point {
        let angle = degrees.to_radians();
        Point::new(
            self.center.x + self.rx * angle.cos(),
            self.center.y + self.ry * angle.sin(),
        )
    }
}

impl Oval for Ellipse {
    fn center(&self) -> Point {
        self.center
    }

    fn radius_x(&self) -> f64 {
        self.rx
    }

    fn radius_y(&self) -> f64 {
        self.ry
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn set_radius_x(&mut self, rx: f64) {
        self.rx = rx;
    }

    fn set_radius_y(&mut self, ry: f64) {
        self.ry = ry;
    }
}
