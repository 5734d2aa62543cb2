use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates `v` by `angle` radians about `axis` (right-hand rule).
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the axis is degenerate.
pub fn rotate_about(v: &Vector3, axis: &Vector3, angle: f64) -> Result<Vector3> {
    let axis = Unit::try_new(*axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    Ok(Rotation3::from_axis_angle(&axis, angle) * v)
}
