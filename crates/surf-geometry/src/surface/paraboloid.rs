//! Paraboloid of revolution.

use serde::{Deserialize, Serialize};

use super::HeightField;
use crate::domain::SamplingDomain;

/// `z = coefficient * (x^2 + y^2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paraboloid {
    domain: SamplingDomain,
    coefficient: f64,
}

impl Paraboloid {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), coefficient: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            coefficient,
        }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl HeightField for Paraboloid {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        self.coefficient * (x * x + y * y)
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}
