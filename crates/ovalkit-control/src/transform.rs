//! Screen/image coordinate mapping.
//!
//! Touch events arrive in view pixels (0,0 at the top-left of the view) while
//! the ellipse lives in image pixels. The host supplies the mapping as a
//! 2D affine matrix:
//!
//! ```text
//! | scale_x  skew_x   trans_x |
//! | skew_y   scale_y  trans_y |
//! |   0        0         1    |
//! ```
//!
//! so that
//!
//! ```text
//! x' = scale_x * x + skew_x * y + trans_x
//! y' = skew_y * x + scale_y * y + trans_y
//! ```

use std::fmt;

use ovalkit_core::constants::SINGULAR_EPSILON;
use ovalkit_core::{ControlError, Point};
use serde::{Deserialize, Serialize};

/// A 6-parameter 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    scale_x: f64,
    skew_x: f64,
    trans_x: f64,
    skew_y: f64,
    scale_y: f64,
    trans_y: f64,
}

impl AffineTransform {
    /// Creates a transform from its six coefficients in row order.
    pub fn new(
        scale_x: f64,
        skew_x: f64,
        trans_x: f64,
        skew_y: f64,
        scale_y: f64,
        trans_y: f64,
    ) -> Self {
        Self {
            scale_x,
            skew_x,
            trans_x,
            skew_y,
            scale_y,
            trans_y,
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// Builds a transform from `[scale_x, skew_x, trans_x, skew_y, scale_y, trans_y]`.
    pub fn from_values(values: [f64; 6]) -> Self {
        let [scale_x, skew_x, trans_x, skew_y, scale_y, trans_y] = values;
        Self::new(scale_x, skew_x, trans_x, skew_y, scale_y, trans_y)
    }

    /// The coefficients in the order accepted by [`AffineTransform::from_values`].
    pub fn values(&self) -> [f64; 6] {
        [
            self.scale_x,
            self.skew_x,
            self.trans_x,
            self.skew_y,
            self.scale_y,
            self.trans_y,
        ]
    }

    /// Image-to-view transform that fits an image inside a view, preserving
    /// aspect ratio and centering the image.
    ///
    /// Returns the identity for empty images or views.
    pub fn fit_center(
        image_width: f64,
        image_height: f64,
        view_width: f64,
        view_height: f64,
    ) -> Self {
        if image_width <= 0.0 || image_height <= 0.0 || view_width <= 0.0 || view_height <= 0.0 {
            return Self::identity();
        }

        let zoom = (view_width / image_width).min(view_height / image_height);
        let pan_x = (view_width - image_width * zoom) / 2.0;
        let pan_y = (view_height - image_height * zoom) / 2.0;

        Self::new(zoom, 0.0, pan_x, 0.0, zoom, pan_y)
    }

    /// Maps a point, including translation.
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.scale_x * p.x + self.skew_x * p.y + self.trans_x,
            self.skew_y * p.x + self.scale_y * p.y + self.trans_y,
        )
    }

    /// Maps every point of the slice in place.
    pub fn map_points(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.map_point(*p);
        }
    }

    /// Maps a displacement; translation is ignored.
    pub fn map_vector(&self, v: Point) -> Point {
        Point::new(
            self.scale_x * v.x + self.skew_x * v.y,
            self.skew_y * v.x + self.scale_y * v.y,
        )
    }

    /// Returns the transform that applies `self` first and then `next`.
    pub fn then(&self, next: &AffineTransform) -> AffineTransform {
        AffineTransform::new(
            next.scale_x * self.scale_x + next.skew_x * self.skew_y,
            next.scale_x * self.skew_x + next.skew_x * self.scale_y,
            next.scale_x * self.trans_x + next.skew_x * self.trans_y + next.trans_x,
            next.skew_y * self.scale_x + next.scale_y * self.skew_y,
            next.skew_y * self.skew_x + next.scale_y * self.scale_y,
            next.skew_y * self.trans_x + next.scale_y * self.trans_y + next.trans_y,
        )
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.scale_x * self.scale_y - self.skew_x * self.skew_y
    }

    /// Inverse transform, e.g. view-to-image from image-to-view.
    pub fn invert(&self) -> Result<AffineTransform, ControlError> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(ControlError::SingularTransform { determinant: det });
        }

        let scale_x = self.scale_y / det;
        let skew_x = -self.skew_x / det;
        let skew_y = -self.skew_y / det;
        let scale_y = self.scale_x / det;
        let trans_x = -(scale_x * self.trans_x + skew_x * self.trans_y);
        let trans_y = -(skew_y * self.trans_x + scale_y * self.trans_y);

        Ok(AffineTransform::new(
            scale_x, skew_x, trans_x, skew_y, scale_y, trans_y,
        ))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.1}][{:.3}, {:.3}, {:.1}]",
            self.scale_x, self.skew_x, self.trans_x, self.skew_y, self.scale_y, self.trans_y
        )
    }
}
