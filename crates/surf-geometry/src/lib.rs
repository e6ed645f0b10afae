//! surfgen geometry: sampled height-field surfaces and wireframe solids.
//!
//! Every shape is built once from its parameters and queried with
//! `generate_data`, which returns the `x`, `y` and `z` coordinates to plot.

pub mod data;
pub mod domain;
pub mod shape;
pub mod solid;
pub mod surface;
pub mod tessellate;

pub use data::ShapeData;
pub use domain::SamplingDomain;
pub use shape::{Shape, Surface3D};
pub use solid::{Cube, Cylinder, Pyramid};
pub use surface::{Conic, HeightField, Hyperboloid, Paraboloid, Plane, Sinusoid, Torus};
