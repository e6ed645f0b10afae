use std::f64::consts::TAU;

/// Thresholds below which a shape parameter counts as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Lengths and coefficients closer to zero than this are treated as zero.
    pub linear: f64,
    /// Angles (radians) closer than this are treated as equal.
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Whether two angles name the same direction, modulo a full turn.
    pub fn same_angle(self, a: f64, b: f64) -> bool {
        let d = (a - b).rem_euclid(TAU);
        d < self.angular || TAU - d < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }
}
