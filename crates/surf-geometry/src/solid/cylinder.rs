//! Cylinder rims.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::{Result, Tolerance};
use surf_math::{linspace, DEFAULT_RESOLUTION};

use super::check_finite;
use crate::data::ShapeData;

/// A cylinder of `radius` standing on the xy plane, up to `height`.
///
/// The output is the rim sampled at `segments` angles over `[0, 2*PI]`
/// (both ends included, so each loop closes on itself). `x` and `y` hold the
/// rim twice in a row; `z` holds `segments` zeros followed by `segments`
/// copies of `height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    radius: f64,
    height: f64,
    segments: usize,
}

impl Cylinder {
    pub fn new(radius: f64, height: f64) -> Self {
        Self::with_segments(radius, height, DEFAULT_RESOLUTION)
    }

    pub fn with_segments(radius: f64, height: f64, segments: usize) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }

    fn angles(&self) -> Vec<f64> {
        linspace(0.0, TAU, self.segments)
    }

    /// Rim coordinates `(x, y)` at each sampled angle.
    pub fn rim(&self) -> (Vec<f64>, Vec<f64>) {
        self.angles()
            .into_iter()
            .map(|theta| (self.radius * theta.cos(), self.radius * theta.sin()))
            .unzip()
    }

    /// Whether the first and last sampled angles coincide, closing the rim.
    pub fn is_closed(&self) -> bool {
        let angles = self.angles();
        match (angles.first(), angles.last()) {
            (Some(&first), Some(&last)) if angles.len() > 1 => {
                Tolerance::default().same_angle(first, last)
            }
            _ => false,
        }
    }

    pub fn generate_data(&self) -> ShapeData {
        let (rim_x, rim_y) = self.rim();
        let n = self.segments;

        // Rim duplicated as one block; not interleaved with the z split.
        let x = [rim_x.as_slice(), rim_x.as_slice()].concat();
        let y = [rim_y.as_slice(), rim_y.as_slice()].concat();
        let mut z = vec![0.0; n];
        z.resize(2 * n, self.height);

        ShapeData::Path { x, y, z }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn segments(&self) -> usize {
        self.segments
    }
}

impl Validate for Cylinder {
    fn validate(&self) -> Result<()> {
        check_finite("cylinder", "radius", self.radius)?;
        check_finite("cylinder", "height", self.height)
    }
}
