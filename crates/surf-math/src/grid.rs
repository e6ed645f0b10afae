//! Regular 2D sampling grids.

use std::ops::Index;

use log::trace;
use serde::{Deserialize, Serialize};

/// Samples per axis used by every grid-based shape and by the cylinder rim.
pub const DEFAULT_RESOLUTION: usize = 100;

/// A dense row-major 2D array of `f64`.
///
/// For meshgrid output, a row holds one fixed y-sample and a column one
/// fixed x-sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    #[serde(with = "crate::float_serde")]
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    #[serde(deserialize_with = "crate::float_serde::deserialize")]
    values: Vec<f64>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let len = raw.values.len();
        Grid::from_vec(raw.rows, raw.cols, raw.values).ok_or_else(|| {
            format!("grid of shape ({}, {}) cannot hold {} values", raw.rows, raw.cols, len)
        })
    }
}

impl Grid {
    /// Build a grid from row-major values. Returns `None` if the length does
    /// not match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Option<Self> {
        if values.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, values })
    }

    /// Build a grid by evaluating `f(i, j)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                values.push(f(i, j));
            }
        }
        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.values[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows {
            Some(&self.values[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "grid index ({}, {}) out of bounds for shape ({}, {})",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.values[i * self.cols + j]
    }
}

/// `num` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// The last sample is pinned to `stop` so it is exact regardless of rounding
/// in the step. A reversed range simply yields decreasing samples.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut samples: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            samples[num - 1] = stop;
            samples
        }
    }
}

/// Cartesian expansion of two axis sample vectors.
///
/// Returns `(X, Y)` of shape `(ys.len(), xs.len())` with `X[i][j] = xs[j]`
/// and `Y[i][j] = ys[i]`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid, Grid) {
    let x = Grid::from_fn(ys.len(), xs.len(), |_, j| xs[j]);
    let y = Grid::from_fn(ys.len(), xs.len(), |i, _| ys[i]);
    (x, y)
}

/// Sample both ranges with `resolution` points each and expand them into a grid.
pub fn build_grid_with_resolution(
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: usize,
) -> (Grid, Grid) {
    trace!(
        "building {}x{} grid over x={:?} y={:?}",
        resolution,
        resolution,
        x_range,
        y_range
    );
    let xs = linspace(x_range.0, x_range.1, resolution);
    let ys = linspace(y_range.0, y_range.1, resolution);
    meshgrid(&xs, &ys)
}

/// Sample both ranges with [`DEFAULT_RESOLUTION`] points and expand them into
/// a 100x100 grid.
pub fn build_grid(x_range: (f64, f64), y_range: (f64, f64)) -> (Grid, Grid) {
    build_grid_with_resolution(x_range, y_range, DEFAULT_RESOLUTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linspace_endpoints() {
        let s = linspace(-1.0, 1.0, 5);
        assert_eq!(s, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let s = linspace(0.0, 0.3, 100);
        assert_eq!(s.len(), 100);
        assert_eq!(s[0], 0.0);
        assert_eq!(s[99], 0.3);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_linspace_reversed_range() {
        let s = linspace(1.0, -1.0, 3);
        assert_eq!(s, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_build_grid_shape_and_orientation() {
        let (x, y) = build_grid((-2.0, 2.0), (0.0, 10.0));
        assert_eq!(x.shape(), (100, 100));
        assert_eq!(y.shape(), (100, 100));

        // X varies along columns, Y along rows
        assert_eq!(x[(0, 0)], -2.0);
        assert_eq!(x[(57, 99)], 2.0);
        assert_eq!(x[(0, 10)], x[(99, 10)]);
        assert_eq!(y[(0, 0)], 0.0);
        assert_eq!(y[(99, 42)], 10.0);
        assert_eq!(y[(10, 0)], y[(10, 99)]);
    }

    #[test]
    fn test_build_grid_monotonic() {
        let (x, y) = build_grid((-3.0, 5.0), (-1.0, 1.0));
        let row = x.row(0).unwrap();
        assert!(row.windows(2).all(|w| w[0] < w[1]));
        for i in 1..y.rows() {
            assert!(y[(i - 1, 0)] < y[(i, 0)]);
        }
    }

    #[test]
    fn test_grid_integer_samples() {
        let (x, _) = build_grid((0.0, 99.0), (0.0, 99.0));
        for j in 0..100 {
            assert_abs_diff_eq!(x[(0, j)], j as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_get_bounds() {
        let g = Grid::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(g.get(1, 2), Some(5.0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 3), None);
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn test_from_vec_rejects_bad_length() {
        assert!(Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_none());
        let g = Grid::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(g.row(0), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let ok: Grid = serde_json::from_str(r#"{"rows":1,"cols":2,"values":[1.0,2.0]}"#).unwrap();
        assert_eq!(ok.shape(), (1, 2));

        let bad = serde_json::from_str::<Grid>(r#"{"rows":2,"cols":2,"values":[1.0]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_undefined_values_survive_json() {
        let g = Grid::from_vec(1, 3, vec![0.5, f64::NAN, f64::INFINITY]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape(), (1, 3));
        assert_eq!(back.get(0, 0), Some(0.5));
        assert!(back[(0, 1)].is_nan());
        assert_eq!(back[(0, 2)], f64::INFINITY);
    }
}
