//! Handle identity and placement.
//!
//! An ellipse carries nine handles: its center plus eight compass points
//! spaced 45° apart. Compass points are numbered clockwise from east in
//! screen convention (y grows downward), so index 3 is south and index 7 is
//! north.

use std::fmt;
use std::ops::Index;

use ovalkit_core::constants::HANDLE_COUNT;
use ovalkit_core::{ControlError, Point};
use serde::{Deserialize, Serialize};

use crate::ellipse::{Ellipse, Oval};

/// One of the nine grab points of the ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Handle {
    Center = 0,
    East = 1,
    SouthEast = 2,
    South = 3,
    SouthWest = 4,
    West = 5,
    NorthWest = 6,
    North = 7,
    NorthEast = 8,
}

impl Handle {
    /// All handles in index order.
    pub const ALL: [Handle; HANDLE_COUNT] = [
        Handle::Center,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
        Handle::NorthWest,
        Handle::North,
        Handle::NorthEast,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, ControlError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ControlError::InvalidHandle { index })
    }

    /// Angle on the outline in degrees, or `None` for the center.
    pub fn angle_degrees(self) -> Option<f64> {
        match self {
            Handle::Center => None,
            other => Some((other.index() - 1) as f64 * 45.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Handle::Center => "center",
            Handle::East => "east",
            Handle::SouthEast => "south-east",
            Handle::South => "south",
            Handle::SouthWest => "south-west",
            Handle::West => "west",
            Handle::NorthWest => "north-west",
            Handle::North => "north",
            Handle::NorthEast => "north-east",
        }
    }
}

impl TryFrom<usize> for Handle {
    type Error = ControlError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positions of all nine handles for one ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleSet {
    points: [Point; HANDLE_COUNT],
}

impl HandleSet {
    /// Places the center handle at `center` and compass handle `k` at
    /// `(cx + rx·cos θ, cy + ry·sin θ)` with `θ = (k - 1)·45°`.
    pub fn fill(center: Point, rx: f64, ry: f64) -> Self {
        let ellipse = Ellipse::new(center, rx, ry);
        let mut points = [center; HANDLE_COUNT];
        for handle in &Handle::ALL[1..] {
            if let Some(angle) = handle.angle_degrees() {
                points[handle.index()] = ellipse.point_at(angle);
            }
        }
        Self { points }
    }

    pub fn from_oval<O: Oval + ?Sized>(oval: &O) -> Self {
        Self::fill(oval.center(), oval.radius_x(), oval.radius_y())
    }

    pub fn get(&self, handle: Handle) -> Point {
        self.points[handle.index()]
    }

    pub fn points(&self) -> &[Point; HANDLE_COUNT] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, Point)> + '_ {
        Handle::ALL.iter().map(move |&h| (h, self.points[h.index()]))
    }

    /// Returns the handle nearest `point` if its squared distance is strictly
    /// below `threshold_squared`. On exact ties the lower index wins.
    pub fn closest(&self, point: Point, threshold_squared: f64) -> Option<Handle> {
        let mut min = f64::MAX;
        let mut closest = None;
        for (handle, p) in self.iter() {
            let dist = p.distance_squared_to(&point);
            if dist < min {
                min = dist;
                closest = Some(handle);
            }
        }

        if min < threshold_squared {
            closest
        } else {
            None
        }
    }
}

impl Index<Handle> for HandleSet {
    type Output = Point;

    fn index(&self, handle: Handle) -> &Point {
        &self.points[handle.index()]
    }
}
