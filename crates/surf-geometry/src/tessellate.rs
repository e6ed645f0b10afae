//! Conversion of generated coordinates into primitives a renderer can draw.

use surf_math::Point3;

use crate::data::ShapeData;

/// Triangulate surface data using two triangles per grid cell.
///
/// Vertices are the grid points in row-major order. Triangles touching a
/// vertex with an undefined coordinate are dropped, leaving a hole where the
/// surface is undefined. Returns `None` for path data.
///
/// # Returns
/// A tuple of `(vertices, triangles)` where each triangle is an array of 3 vertex indices.
pub fn grid_to_triangles(data: &ShapeData) -> Option<(Vec<Point3>, Vec<[u32; 3]>)> {
    let (rows, cols) = data.grid_shape()?;
    let vertices = data.points();

    let idx = |i: usize, j: usize| -> u32 { (i * cols + j) as u32 };
    let defined = |tri: &[u32; 3]| tri.iter().all(|&v| vertices[v as usize].is_finite());

    let mut triangles = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1) * 2);
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let first = [idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)];
            let second = [idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)];
            triangles.extend([first, second].into_iter().filter(|t| defined(t)));
        }
    }

    Some((vertices, triangles))
}

/// Split path data into its consecutive line segments.
///
/// Returns `None` for surface data.
pub fn path_to_segments(data: &ShapeData) -> Option<Vec<(Point3, Point3)>> {
    if data.is_surface() {
        return None;
    }
    let points = data.points();
    Some(points.windows(2).map(|w| (w[0], w[1])).collect())
}
