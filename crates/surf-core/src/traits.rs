use crate::error::Result;

/// Check the parameters of a shape or domain on demand.
///
/// Construction never validates; callers that want to reject degenerate
/// input ask for it explicitly.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> Option<(Self::Point, Self::Point)>;
}
