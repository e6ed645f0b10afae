//! Torus profile.

use serde::{Deserialize, Serialize};

use super::{radial_distance, HeightField};
use crate::domain::SamplingDomain;

/// `z = (major_radius - sqrt(x^2 + y^2))^2 + minor_radius^2`.
///
/// The height is smallest, `minor_radius^2`, on the circle of radius
/// `major_radius` around the z axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    domain: SamplingDomain,
    major_radius: f64,
    minor_radius: f64,
}

impl Torus {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), major_radius: f64, minor_radius: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            major_radius,
            minor_radius,
        }
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }
}

impl HeightField for Torus {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        let d = self.major_radius - radial_distance(x, y);
        d * d + self.minor_radius * self.minor_radius
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_torus_on_major_circle() {
        let torus = Torus::new((-5.0, 5.0), (-5.0, 5.0), 3.0, 1.0);
        assert_eq!(torus.height_at(3.0, 0.0), 1.0);
        assert_eq!(torus.height_at(0.0, -3.0), 1.0);
    }

    #[test]
    fn test_torus_center_and_outside() {
        let torus = Torus::new((-5.0, 5.0), (-5.0, 5.0), 3.0, 1.0);
        assert_eq!(torus.height_at(0.0, 0.0), 10.0);
        assert_abs_diff_eq!(torus.height_at(3.0, 4.0), 5.0, epsilon = 1e-12);
    }
}
