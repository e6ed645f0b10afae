//! Inclined plane.

use serde::{Deserialize, Serialize};

use super::HeightField;
use crate::domain::SamplingDomain;

/// A plane through the origin rising along x: `z = slope * x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    domain: SamplingDomain,
    slope: f64,
}

impl Plane {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), slope: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            slope,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl HeightField for Plane {
    fn height_at(&self, x: f64, _y: f64) -> f64 {
        self.slope * x
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}
