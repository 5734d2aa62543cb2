use crate::error::{Result, SamplingError};
use crate::math::{rotate_about, Point3, Vector3};
use crate::model::PathMarker;

/// One dense sample on the bent pipe's physical path.
#[derive(Debug, Clone, Copy)]
pub struct CenterlineMarker {
    pub point: Point3,
    pub tangent: Vector3,
    /// Handle direction toward the bend's rotation axis.
    pub radial: Vector3,
    /// Developed distance from the pipe start.
    pub distance: f64,
}

/// Whether an index marks where a bend arc begins or ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRole {
    Start,
    End,
}

/// Position of one bend arc boundary in the dense centerline.
///
/// Produced in Start/End pairs, in the order the bends occur in the
/// conduit order; decoration overlays index into the centerline with them.
#[derive(Debug, Clone, Copy)]
pub struct CenterlineIndex {
    pub role: IndexRole,
    pub index: usize,
}

/// A sampled centerline: dense markers plus the bend boundary indices.
#[derive(Debug, Clone, Default)]
pub struct Centerline {
    pub markers: Vec<CenterlineMarker>,
    pub bend_indices: Vec<CenterlineIndex>,
}

/// Expands a coarse conduit order into a dense centerline.
pub struct SampleCenterline<'a> {
    order: &'a [PathMarker],
    degrees_per_step: f64,
}

impl<'a> SampleCenterline<'a> {
    /// Creates a new `SampleCenterline` operation.
    #[must_use]
    pub fn new(order: &'a [PathMarker], degrees_per_step: f64) -> Self {
        Self {
            order,
            degrees_per_step,
        }
    }

    /// Executes the sampling.
    ///
    /// Waypoints advance along the running tangent and emit one marker;
    /// bend arcs rotate around `point + radial * radius` in
    /// `ceil(angle / degrees_per_step)` equal increments, one marker per
    /// increment. Distances are strictly increasing along the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the order has fewer than two markers or the
    /// step is not positive; both indicate a calculator defect, not a
    /// user-input problem.
    pub fn execute(&self) -> Result<Centerline> {
        if self.order.len() < 2 {
            return Err(SamplingError::ConduitOrderTooShort(self.order.len()).into());
        }
        if self.degrees_per_step <= 0.0 || !self.degrees_per_step.is_finite() {
            return Err(SamplingError::InvalidStep(self.degrees_per_step).into());
        }

        let mut markers = Vec::new();
        let mut bend_indices = Vec::new();

        let (mut tangent, mut radial) = frame_of(&self.order[0]);
        let mut position = Point3::origin();
        let mut walked = self.order[0].distance();
        markers.push(CenterlineMarker {
            point: position,
            tangent,
            radial,
            distance: walked,
        });

        for marker in &self.order[1..] {
            match *marker {
                PathMarker::Waypoint {
                    distance,
                    tangent: t,
                    radial: u,
                } => {
                    position += tangent * (distance - walked);
                    walked = distance;
                    tangent = t;
                    radial = u;
                    markers.push(CenterlineMarker {
                        point: position,
                        tangent,
                        radial,
                        distance: walked,
                    });
                }
                PathMarker::BendArc {
                    distance,
                    tangent: t,
                    radial: u,
                    angle_deg,
                    radius,
                    ..
                } => {
                    // Advance to the arc start without emitting; the arc's
                    // own samples begin at the first rotation increment.
                    position += tangent * (distance - walked);
                    walked = distance;
                    tangent = t;
                    radial = u;

                    let rotations = (angle_deg / self.degrees_per_step).ceil().max(1.0);
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let steps = rotations as usize;
                    let step_rad = angle_deg.to_radians() / rotations;
                    let center = position + radial * radius;
                    let axis = radial.cross(&tangent);

                    bend_indices.push(CenterlineIndex {
                        role: IndexRole::Start,
                        index: markers.len(),
                    });
                    for _ in 0..steps {
                        let arm = rotate_about(&(position - center), &axis, -step_rad)?;
                        position = center + arm;
                        tangent = rotate_about(&tangent, &axis, -step_rad)?;
                        radial = rotate_about(&radial, &axis, -step_rad)?;
                        walked += radius * step_rad;
                        markers.push(CenterlineMarker {
                            point: position,
                            tangent,
                            radial,
                            distance: walked,
                        });
                    }
                    bend_indices.push(CenterlineIndex {
                        role: IndexRole::End,
                        index: markers.len() - 1,
                    });
                }
            }
        }

        Ok(Centerline {
            markers,
            bend_indices,
        })
    }
}

fn frame_of(marker: &PathMarker) -> (Vector3, Vector3) {
    match *marker {
        PathMarker::Waypoint {
            tangent, radial, ..
        }
        | PathMarker::BendArc {
            tangent, radial, ..
        } => (tangent, radial),
    }
}
