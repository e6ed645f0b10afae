//! Wireframe cube.

use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::Result;

use super::check_finite;
use crate::data::ShapeData;

/// Corners of the unit cube in the order visited by the wireframe path.
///
/// The 16 points form one connected polyline covering all 12 edges, so the
/// cube can be drawn with a single stroke.
const UNIT_PATH_X: [f64; 16] = [0., 1., 1., 0., 0., 0., 1., 1., 0., 0., 1., 1., 1., 1., 0., 0.];
const UNIT_PATH_Y: [f64; 16] = [0., 0., 1., 1., 0., 0., 0., 1., 1., 0., 0., 1., 1., 0., 0., 1.];
const UNIT_PATH_Z: [f64; 16] = [0., 0., 0., 0., 0., 1., 1., 1., 1., 1., 1., 1., 0., 0., 0., 1.];

/// An axis-aligned cube with one corner at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    side: f64,
}

impl Cube {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// The 16-point edge path scaled by the side length.
    pub fn generate_data(&self) -> ShapeData {
        let scale = |unit: &[f64; 16]| unit.iter().map(|&u| u * self.side).collect::<Vec<_>>();
        ShapeData::Path {
            x: scale(&UNIT_PATH_X),
            y: scale(&UNIT_PATH_Y),
            z: scale(&UNIT_PATH_Z),
        }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Validate for Cube {
    fn validate(&self) -> Result<()> {
        check_finite("cube", "side", self.side)
    }
}
