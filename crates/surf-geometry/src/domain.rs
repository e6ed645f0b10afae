//! Sampling domains shared by the grid-based shapes.

use serde::{Deserialize, Serialize};
use surf_core::traits::Validate;
use surf_core::{Result, SurfError};
use surf_math::{build_grid_with_resolution, Grid, DEFAULT_RESOLUTION};

/// An `(x_range, y_range)` pair together with its precomputed meshgrid.
///
/// No checks are made at construction: a reversed range produces a
/// decreasing axis. Use [`Validate::validate`] to reject such input.
///
/// Only the ranges and the resolution are serialized; the grids are rebuilt
/// on deserialization, so X and Y always agree with each other and with the
/// ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DomainSpec", into = "DomainSpec")]
pub struct SamplingDomain {
    x_range: (f64, f64),
    y_range: (f64, f64),
    x: Grid,
    y: Grid,
}

impl SamplingDomain {
    /// A 100x100 domain over the given ranges.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self::with_resolution(x_range, y_range, DEFAULT_RESOLUTION)
    }

    /// A `resolution x resolution` domain over the given ranges.
    pub fn with_resolution(x_range: (f64, f64), y_range: (f64, f64), resolution: usize) -> Self {
        let (x, y) = build_grid_with_resolution(x_range, y_range, resolution);
        Self {
            x_range,
            y_range,
            x,
            y,
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// X coordinates; constant down each column.
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Y coordinates; constant along each row.
    pub fn y(&self) -> &Grid {
        &self.y
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.x.cols()
    }
}

#[derive(Serialize, Deserialize)]
struct DomainSpec {
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
}

impl From<DomainSpec> for SamplingDomain {
    fn from(spec: DomainSpec) -> Self {
        Self::with_resolution(spec.x_range, spec.y_range, spec.resolution)
    }
}

impl From<SamplingDomain> for DomainSpec {
    fn from(domain: SamplingDomain) -> Self {
        Self {
            x_range: domain.x_range,
            y_range: domain.y_range,
            resolution: domain.resolution(),
        }
    }
}

fn check_range(axis: &str, (lo, hi): (f64, f64)) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(SurfError::InvalidDomain(format!(
            "{} range ({}, {}) has a non-finite bound",
            axis, lo, hi
        )));
    }
    if lo > hi {
        return Err(SurfError::InvalidDomain(format!(
            "{} range ({}, {}) is reversed",
            axis, lo, hi
        )));
    }
    Ok(())
}

impl Validate for SamplingDomain {
    fn validate(&self) -> Result<()> {
        check_range("x", self.x_range)?;
        check_range("y", self.y_range)
    }
}
