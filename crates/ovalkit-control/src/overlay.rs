//! Decoration geometry for renderers.
//!
//! The control is drawn as the ellipse outline, short tick arcs just inside
//! and outside the outline at the four axis handles, small squares on the
//! four diagonal handles, and a dot on the center. This module computes
//! where those pieces go; painting them is left to the host.

use ovalkit_core::{Point, Rect};
use ovalkit_settings::ControlConfig;
use serde::{Deserialize, Serialize};

use crate::ellipse::Ellipse;

const AXIS_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
const DIAGONAL_ANGLES: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

/// An arc of the ellipse inscribed in `bounds`, angles in degrees clockwise
/// from east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcTick {
    pub bounds: Rect,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterDot {
    pub center: Point,
    pub radius: f64,
}

/// Everything a renderer needs to draw the control for one ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub outline: Rect,
    pub ticks: Vec<ArcTick>,
    pub markers: Vec<Rect>,
    pub center_dot: CenterDot,
}

impl Overlay {
    pub fn compute(ellipse: &Ellipse, config: &ControlConfig) -> Self {
        let offset = config.tick_offset;
        let outer = Rect::from_center(ellipse.center, ellipse.rx + offset, ellipse.ry + offset);
        let inner = Rect::from_center(
            ellipse.center,
            (ellipse.rx - offset).max(0.0),
            (ellipse.ry - offset).max(0.0),
        );

        let half_sweep = config.tick_half_sweep;
        let ticks = AXIS_ANGLES
            .iter()
            .flat_map(|&angle| {
                [outer, inner].into_iter().map(move |bounds| ArcTick {
                    bounds,
                    start_angle: angle - half_sweep,
                    sweep_angle: half_sweep * 2.0,
                })
            })
            .collect();

        let marker_half = half_sweep * 2.0;
        let markers = DIAGONAL_ANGLES
            .iter()
            .map(|&angle| Rect::from_center(ellipse.point_at(angle), marker_half, marker_half))
            .collect();

        Self {
            outline: ellipse.bounds(),
            ticks,
            markers,
            center_dot: CenterDot {
                center: ellipse.center,
                radius: config.center_dot_size,
            },
        }
    }
}
