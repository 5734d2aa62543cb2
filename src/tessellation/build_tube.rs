use std::f64::consts::TAU;

use crate::error::{MeshError, Result};
use crate::math::{Point2, Point3};

use super::CenterlineMarker;

/// Renderable tube surface buffers.
///
/// `positions.len() == sides * rings` and
/// `indices.len() == sides * 6 * (rings - 1)`; each consecutive index
/// triple is one triangle.
#[derive(Debug, Clone, Default)]
pub struct TubeMesh {
    pub positions: Vec<Point3>,
    pub uvs: Vec<Point2>,
    pub indices: Vec<u32>,
}

/// Sweeps a regular-polygon cross-section along a dense centerline.
///
/// Ring orientation is radial-aligned: each ring lies in the plane spanned
/// by the marker's radial and `tangent x radial`, with vertex 0 on the
/// radial (handle) side. Rings therefore never pick up roll drift relative
/// to the bend's handle direction.
pub struct BuildTube<'a> {
    markers: &'a [CenterlineMarker],
    sides: usize,
    radius: f64,
}

impl<'a> BuildTube<'a> {
    /// Creates a new `BuildTube` operation.
    #[must_use]
    pub fn new(markers: &'a [CenterlineMarker], sides: usize, radius: f64) -> Self {
        Self {
            markers,
            sides,
            radius,
        }
    }

    /// Executes the sweep, returning freshly owned buffers.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 3 sides, fewer than 2 centerline
    /// markers, or a non-positive radius.
    pub fn execute(&self) -> Result<TubeMesh> {
        if self.sides < 3 {
            return Err(MeshError::TooFewSides(self.sides).into());
        }
        if self.markers.len() < 2 {
            return Err(MeshError::CenterlineTooShort(self.markers.len()).into());
        }
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(MeshError::InvalidRadius(self.radius).into());
        }

        let rings = self.markers.len();
        let total = self.markers[rings - 1].distance.max(f64::MIN_POSITIVE);
        let mut mesh = TubeMesh {
            positions: Vec::with_capacity(self.sides * rings),
            uvs: Vec::with_capacity(self.sides * rings),
            indices: Vec::with_capacity(self.sides * 6 * (rings - 1)),
        };

        for marker in self.markers {
            let binormal = marker.tangent.cross(&marker.radial);
            for side in 0..self.sides {
                let theta = TAU * to_f64(side) / to_f64(self.sides);
                let offset = marker.radial * theta.cos() + binormal * theta.sin();
                mesh.positions.push(marker.point + offset * self.radius);
                mesh.uvs
                    .push(Point2::new(to_f64(side) / to_f64(self.sides), marker.distance / total));
            }
        }

        for ring in 0..rings - 1 {
            for side in 0..self.sides {
                let next_side = (side + 1) % self.sides;
                let a = index_of(ring, side, self.sides);
                let b = index_of(ring, next_side, self.sides);
                let c = index_of(ring + 1, side, self.sides);
                let d = index_of(ring + 1, next_side, self.sides);
                mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Ok(mesh)
    }
}

/// Copies the rings `first..=last` of a previously built tube into a new,
/// independent mesh, re-basing the triangle indices.
///
/// Used for partial previews without recomputing geometry; the ring
/// indices correspond one-to-one to centerline marker indices.
///
/// # Errors
///
/// Returns an error if the mesh's vertex count is not a multiple of
/// `sides`, or the requested range does not cover at least two rings
/// inside the mesh.
pub fn extract_range(mesh: &TubeMesh, sides: usize, first: usize, last: usize) -> Result<TubeMesh> {
    if sides == 0 || mesh.positions.len() % sides != 0 {
        return Err(MeshError::NotRingAligned {
            vertices: mesh.positions.len(),
            sides,
        }
        .into());
    }
    let rings = mesh.positions.len() / sides;
    if first >= last || last >= rings {
        return Err(MeshError::RangeOutOfBounds { first, last, rings }.into());
    }

    let vertex_range = first * sides..(last + 1) * sides;
    let index_range = first * sides * 6..last * sides * 6;
    let base = to_u32(first * sides);

    Ok(TubeMesh {
        positions: mesh.positions[vertex_range.clone()].to_vec(),
        uvs: mesh.uvs[vertex_range].to_vec(),
        indices: mesh.indices[index_range].iter().map(|i| i - base).collect(),
    })
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}

#[allow(clippy::cast_possible_truncation)]
fn to_u32(n: usize) -> u32 {
    n as u32
}

fn index_of(ring: usize, side: usize, sides: usize) -> u32 {
    to_u32(ring * sides + side)
}
