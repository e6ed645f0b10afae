//! surfgen math: sampling grids, bounding boxes, and the float wire format
//! shared by every serialized coordinate array.

pub mod aabb;
pub mod float_serde;
pub mod grid;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use grid::{build_grid, build_grid_with_resolution, linspace, meshgrid, Grid, DEFAULT_RESOLUTION};

pub type Point3 = DVec3;
