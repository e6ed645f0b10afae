//! Coordinate data returned by shape queries.

use serde::{Deserialize, Serialize};
use surf_core::traits::BoundingBox;
use surf_math::{Aabb3, Grid, Point3};

/// The three coordinate arrays produced by `generate_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeData {
    /// Sampled surface: three grids of identical shape.
    Surface { x: Grid, y: Grid, z: Grid },
    /// Explicit point list, traced in order as a polyline.
    Path {
        #[serde(with = "surf_math::float_serde")]
        x: Vec<f64>,
        #[serde(with = "surf_math::float_serde")]
        y: Vec<f64>,
        #[serde(with = "surf_math::float_serde")]
        z: Vec<f64>,
    },
}

impl ShapeData {
    /// Flat views of the `x`, `y` and `z` coordinates (row-major for surfaces).
    pub fn coordinates(&self) -> (&[f64], &[f64], &[f64]) {
        match self {
            ShapeData::Surface { x, y, z } => (x.as_slice(), y.as_slice(), z.as_slice()),
            ShapeData::Path { x, y, z } => (x, y, z),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coordinates().2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_surface(&self) -> bool {
        matches!(self, ShapeData::Surface { .. })
    }

    /// `(rows, cols)` for surfaces, `None` for paths.
    pub fn grid_shape(&self) -> Option<(usize, usize)> {
        match self {
            ShapeData::Surface { z, .. } => Some(z.shape()),
            ShapeData::Path { .. } => None,
        }
    }

    /// Zip the coordinate arrays into points.
    pub fn points(&self) -> Vec<Point3> {
        let (x, y, z) = self.coordinates();
        x.iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect()
    }

    /// Number of `z` values that are NaN or infinite.
    pub fn count_undefined(&self) -> usize {
        self.coordinates().2.iter().filter(|v| !v.is_finite()).count()
    }

    /// Bounding box of the finite points.
    pub fn aabb(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.points())
    }
}

impl BoundingBox for ShapeData {
    type Point = Point3;

    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        self.aabb().map(|b| (b.min, b.max))
    }
}
