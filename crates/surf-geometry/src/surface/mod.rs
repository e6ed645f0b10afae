//! Height-field surfaces sampled over a [`SamplingDomain`].

mod conic;
mod hyperboloid;
mod paraboloid;
mod plane;
mod sinusoid;
mod torus;

use surf_math::Grid;

use crate::data::ShapeData;
use crate::domain::SamplingDomain;

pub use conic::Conic;
pub use hyperboloid::Hyperboloid;
pub use paraboloid::Paraboloid;
pub use plane::Plane;
pub use sinusoid::Sinusoid;
pub use torus::Torus;

/// A surface given as `z = f(x, y)` over a precomputed sampling grid.
pub trait HeightField: Send + Sync {
    /// Evaluate `z` at `(x, y)`. May return NaN or infinity where `f` is undefined.
    fn height_at(&self, x: f64, y: f64) -> f64;

    /// The grid this surface is sampled on.
    fn domain(&self) -> &SamplingDomain;

    /// Evaluate the surface at every grid point, returning `(X, Y, Z)`.
    fn generate_data(&self) -> ShapeData {
        let domain = self.domain();
        let (x, y) = (domain.x(), domain.y());
        let (rows, cols) = x.shape();
        let z = Grid::from_fn(rows, cols, |i, j| self.height_at(x[(i, j)], y[(i, j)]));
        ShapeData::Surface {
            x: x.clone(),
            y: y.clone(),
            z,
        }
    }
}

/// `sqrt(x^2 + y^2)`, written out so results match the plain formula bit for bit.
#[inline]
pub(crate) fn radial_distance(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}
