//! Solids described by explicit vertex paths rather than a sampled surface.

mod cube;
mod cylinder;
mod pyramid;

use surf_core::{Result, SurfError};

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use pyramid::Pyramid;

fn check_finite(shape: &str, name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SurfError::Geometry(format!(
            "{} {} must be finite, got {}",
            shape, name, value
        )))
    }
}
