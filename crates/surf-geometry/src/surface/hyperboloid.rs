//! Hyperboloid-like surface.

use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::{Result, SurfError, Tolerance};

use super::HeightField;
use crate::domain::SamplingDomain;

/// `z = sqrt(x^2 / a^2 - y^2 / b^2 + c)`.
///
/// Where the radicand is negative the height is NaN, and `a = 0` or `b = 0`
/// yields NaN or infinity. These propagate per element and never abort the
/// rest of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperboloid {
    domain: SamplingDomain,
    a: f64,
    b: f64,
    c: f64,
}

impl Hyperboloid {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), a: f64, b: f64, c: f64) -> Self {
        Self {
            domain: SamplingDomain::new(x_range, y_range),
            a,
            b,
            c,
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl HeightField for Hyperboloid {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        ((x * x) / (self.a * self.a) - (y * y) / (self.b * self.b) + self.c).sqrt()
    }

    fn domain(&self) -> &SamplingDomain {
        &self.domain
    }
}

impl Validate for Hyperboloid {
    fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        let tol = Tolerance::default();
        if tol.is_zero(self.a) || tol.is_zero(self.b) {
            return Err(SurfError::Geometry(format!(
                "hyperboloid semi-axes must be non-zero (a = {}, b = {})",
                self.a, self.b
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperboloid_defined_region() {
        let h = Hyperboloid::new((-2.0, 2.0), (-2.0, 2.0), 1.0, 1.0, 1.0);
        assert_eq!(h.height_at(0.0, 0.0), 1.0);
        assert_eq!(h.height_at(0.0, 1.0), 0.0);
        assert_eq!(h.height_at(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_negative_radicand_is_nan() {
        let h = Hyperboloid::new((-2.0, 2.0), (-2.0, 2.0), 1.0, 1.0, 1.0);
        assert!(h.height_at(0.0, 2.0).is_nan());

        // The rest of the grid is still evaluated
        let data = h.generate_data();
        let undefined = data.count_undefined();
        assert!(undefined > 0);
        assert!(undefined < data.len());
    }

    #[test]
    fn test_zero_semi_axis_is_undefined_not_fatal() {
        let h = Hyperboloid::new((-1.0, 1.0), (-1.0, 1.0), 0.0, 1.0, 1.0);
        assert!(h.height_at(1.0, 0.0).is_infinite());
        assert!(h.height_at(0.0, 0.0).is_nan());
        assert_eq!(h.generate_data().len(), 100 * 100);
        assert!(matches!(h.validate(), Err(SurfError::Geometry(_))));
    }

    #[test]
    fn test_validate_accepts_regular_parameters() {
        let h = Hyperboloid::new((-1.0, 1.0), (-1.0, 1.0), 2.0, 3.0, 1.0);
        assert!(h.validate().is_ok());
    }
}
