//! Square-based pyramid outline.

use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::Result;

use super::check_finite;
use crate::data::ShapeData;

/// A pyramid over the square `[0, base] x [0, base]`.
///
/// The path visits four base corners, rises to `(0, 0, height)` above the
/// origin, and ends at the centre of the base, `(base / 2, base / 2, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pyramid {
    base: f64,
    height: f64,
}

impl Pyramid {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    pub fn generate_data(&self) -> ShapeData {
        let (b, h) = (self.base, self.height);
        let mid = b / 2.0;
        ShapeData::Path {
            x: vec![0.0, b, b, 0.0, 0.0, mid],
            y: vec![0.0, 0.0, b, b, 0.0, mid],
            z: vec![0.0, 0.0, 0.0, 0.0, h, 0.0],
        }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Validate for Pyramid {
    fn validate(&self) -> Result<()> {
        check_finite("pyramid", "base", self.base)?;
        check_finite("pyramid", "height", self.height)
    }
}
