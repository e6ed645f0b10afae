//! Radial sine wave.

use serde::{Deserialize, Serialize};

use super::{radial_distance, HeightField};
use crate::domain::SamplingDomain;

/// Concentric ripples: `z = sin(frequency * sqrt(x^2 + y^2))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sinusoid {
    domain: SamplingDomain,
    frequency: f64,
}

impl Sinusoid {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), frequency: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            frequency,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl HeightField for Sinusoid {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        (self.frequency * radial_distance(x, y)).sin()
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}
