//! The closed set of shapes and the single dispatching query.

use log::debug;
use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::{Result, SurfError};

use crate::data::ShapeData;
use crate::domain::SamplingDomain;
use crate::solid::{Cube, Cylinder, Pyramid};
use crate::surface::{Conic, HeightField, Hyperboloid, Paraboloid, Plane, Sinusoid, Torus};

/// A shape with no formula of its own.
///
/// It may carry a sampling domain, built only when both ranges are given,
/// but querying it always fails with [`SurfError::NotImplemented`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface3D {
    domain: Option<SamplingDomain>,
}

impl Surface3D {
    pub fn new(x_range: Option<(f64, f64)>, y_range: Option<(f64, f64)>) -> Self {
        let domain = match (x_range, y_range) {
            (Some(x), Some(y)) => Some(SamplingDomain::new(x, y)),
            _ => None,
        };
        Self { domain }
    }

    pub fn domain(&self) -> Option<&SamplingDomain> {
        self.domain.as_ref()
    }

    pub fn generate_data(&self) -> Result<ShapeData> {
        Err(SurfError::NotImplemented(
            "generate_data must be implemented by a concrete shape".into(),
        ))
    }
}

/// Every shape this crate can sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Base(Surface3D),
    Plane(Plane),
    Paraboloid(Paraboloid),
    Sinusoid(Sinusoid),
    Hyperboloid(Hyperboloid),
    Conic(Conic),
    Torus(Torus),
    Cube(Cube),
    Pyramid(Pyramid),
    Cylinder(Cylinder),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Base(_) => "base",
            Shape::Plane(_) => "plane",
            Shape::Paraboloid(_) => "paraboloid",
            Shape::Sinusoid(_) => "sinusoid",
            Shape::Hyperboloid(_) => "hyperboloid",
            Shape::Conic(_) => "conic",
            Shape::Torus(_) => "torus",
            Shape::Cube(_) => "cube",
            Shape::Pyramid(_) => "pyramid",
            Shape::Cylinder(_) => "cylinder",
        }
    }

    fn height_field(&self) -> Option<&dyn HeightField> {
        match self {
            Shape::Plane(s) => Some(s),
            Shape::Paraboloid(s) => Some(s),
            Shape::Sinusoid(s) => Some(s),
            Shape::Hyperboloid(s) => Some(s),
            Shape::Conic(s) => Some(s),
            Shape::Torus(s) => Some(s),
            Shape::Base(_) | Shape::Cube(_) | Shape::Pyramid(_) | Shape::Cylinder(_) => None,
        }
    }

    /// The sampling domain, if this shape has one.
    pub fn domain(&self) -> Option<&SamplingDomain> {
        match self {
            Shape::Base(base) => base.domain.as_ref(),
            _ => self.height_field().map(|s| s.domain()),
        }
    }

    /// Coordinates of the shape. Pure: repeated calls return identical data.
    ///
    /// Fails only for [`Shape::Base`], which has no formula.
    pub fn generate_data(&self) -> Result<ShapeData> {
        debug!("generating {} data", self.name());
        let data = match self {
            Shape::Base(base) => return base.generate_data(),
            Shape::Plane(s) => s.generate_data(),
            Shape::Paraboloid(s) => s.generate_data(),
            Shape::Sinusoid(s) => s.generate_data(),
            Shape::Hyperboloid(s) => s.generate_data(),
            Shape::Conic(s) => s.generate_data(),
            Shape::Torus(s) => s.generate_data(),
            Shape::Cube(s) => s.generate_data(),
            Shape::Pyramid(s) => s.generate_data(),
            Shape::Cylinder(s) => s.generate_data(),
        };

        let undefined = data.count_undefined();
        if undefined > 0 {
            debug!(
                "{}: {} of {} z values are undefined",
                self.name(),
                undefined,
                data.len()
            );
        }
        Ok(data)
    }
}

impl Validate for Shape {
    fn validate(&self) -> Result<()> {
        match self {
            Shape::Base(base) => base.domain.as_ref().map_or(Ok(()), |d| d.validate()),
            Shape::Hyperboloid(h) => h.validate(),
            Shape::Cube(c) => c.validate(),
            Shape::Pyramid(p) => p.validate(),
            Shape::Cylinder(c) => c.validate(),
            Shape::Plane(_) | Shape::Paraboloid(_) | Shape::Sinusoid(_) | Shape::Conic(_) | Shape::Torus(_) => {
                self.domain().map_or(Ok(()), |d| d.validate())
            }
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Base(Surface3D),
    Plane(Plane),
    Paraboloid(Paraboloid),
    Sinusoid(Sinusoid),
    Hyperboloid(Hyperboloid),
    Conic(Conic),
    Torus(Torus),
    Cube(Cube),
    Pyramid(Pyramid),
    Cylinder(Cylinder),
);
