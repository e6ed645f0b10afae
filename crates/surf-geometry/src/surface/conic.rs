//! Oblique plane through the origin.

use serde::{Deserialize, Serialize};

use super::HeightField;
use crate::domain::SamplingDomain;

/// `z = a * x + b * y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conic {
    domain: SamplingDomain,
    a: f64,
    b: f64,
}

impl Conic {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), a: f64, b: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            a,
            b,
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl HeightField for Conic {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}
