use crate::error::Result;
use crate::formula;
use crate::math::{rotate_about, Vector3};

/// Which physical indicator on the bender a mark aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkFlag {
    Arrow,
    Star,
    Notch,
    Ignore,
}

/// One entry of a conduit order: a straight-run point or a bend arc.
///
/// Distances are developed length along the pipe from its start; `tangent`
/// is the direction of travel at the marker and `radial` the handle
/// direction, pointing from the conduit toward the bend's rotation axis
/// (the arc's rotation center is `point + radial * radius`).
#[derive(Debug, Clone, Copy)]
pub enum PathMarker {
    Waypoint {
        distance: f64,
        tangent: Vector3,
        radial: Vector3,
    },
    BendArc {
        /// Developed distance of the arc's start.
        distance: f64,
        tangent: Vector3,
        radial: Vector3,
        angle_deg: f64,
        radius: f64,
        mark: MarkFlag,
    },
}

impl PathMarker {
    /// Developed distance of this marker from the pipe start.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Waypoint { distance, .. } | Self::BendArc { distance, .. } => *distance,
        }
    }

    #[must_use]
    pub fn is_bend(&self) -> bool {
        matches!(self, Self::BendArc { .. })
    }
}

/// Builds a conduit order while tracking the running frame.
///
/// The order always starts with a Waypoint at distance 0 (tangent +X,
/// radial +Y before any roll), keeps a Waypoint between consecutive arcs,
/// and [`OrderBuilder::finish`] appends the trailing Waypoint.
#[derive(Debug)]
pub struct OrderBuilder {
    markers: Vec<PathMarker>,
    distance: f64,
    tangent: Vector3,
    radial: Vector3,
}

impl OrderBuilder {
    #[must_use]
    pub fn new() -> Self {
        let tangent = Vector3::x();
        let radial = Vector3::y();
        Self {
            markers: vec![PathMarker::Waypoint {
                distance: 0.0,
                tangent,
                radial,
            }],
            distance: 0.0,
            tangent,
            radial,
        }
    }

    /// Rotates the radial (handle) direction about the tangent.
    ///
    /// # Errors
    ///
    /// Returns an error if the running frame is degenerate.
    pub fn roll(&mut self, angle: f64) -> Result<()> {
        self.radial = rotate_about(&self.radial, &self.tangent, angle)?;
        // Before any arc, the initial waypoint carries the rolled frame.
        if self.markers.len() == 1 {
            if let Some(PathMarker::Waypoint { radial, .. }) = self.markers.first_mut() {
                *radial = self.radial;
            }
        }
        Ok(())
    }

    /// Flips the bend direction for the next arc.
    pub fn flip(&mut self) {
        self.radial = -self.radial;
    }

    /// Advances the running distance along the current tangent.
    pub fn advance(&mut self, len: f64) {
        self.distance += len;
    }

    /// Emits a bend arc at the current position and rotates the frame
    /// across it.
    ///
    /// The frame rotates by `-angle` about `cross(radial, tangent)`; the
    /// sampler applies the identical rotation per increment, so the tangent
    /// always curves toward the radial direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the running frame is degenerate.
    pub fn bend(&mut self, angle_deg: f64, radius: f64, mark: MarkFlag) -> Result<()> {
        if self.markers.last().is_some_and(PathMarker::is_bend) {
            self.markers.push(PathMarker::Waypoint {
                distance: self.distance,
                tangent: self.tangent,
                radial: self.radial,
            });
        }
        self.markers.push(PathMarker::BendArc {
            distance: self.distance,
            tangent: self.tangent,
            radial: self.radial,
            angle_deg,
            radius,
            mark,
        });

        let angle = angle_deg.to_radians();
        let axis = self.radial.cross(&self.tangent);
        self.tangent = rotate_about(&self.tangent, &axis, -angle)?;
        self.radial = rotate_about(&self.radial, &axis, -angle)?;
        self.distance += formula::arc_length(radius, angle);
        Ok(())
    }

    /// Appends the trailing Waypoint `tail` past the last bend and returns
    /// the finished order.
    #[must_use]
    pub fn finish(mut self, tail: f64) -> Vec<PathMarker> {
        self.distance += tail;
        self.markers.push(PathMarker::Waypoint {
            distance: self.distance,
            tangent: self.tangent,
            radial: self.radial,
        });
        self.markers
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn two_bend_order_is_canonical() {
        let mut b = OrderBuilder::new();
        b.advance(0.2);
        b.bend(30.0, 0.4, MarkFlag::Arrow).unwrap();
        b.advance(0.5);
        b.flip();
        b.bend(30.0, 0.4, MarkFlag::Arrow).unwrap();
        let order = b.finish(0.2);

        // W A W A W
        assert_eq!(order.len(), 5);
        assert!(!order[0].is_bend());
        assert!(order[1].is_bend());
        assert!(!order[2].is_bend());
        assert!(order[3].is_bend());
        assert!(!order[4].is_bend());
        assert!(order[0].distance().abs() < TOL);
        for pair in order.windows(2) {
            assert!(pair[1].distance() >= pair[0].distance());
        }
    }

    #[test]
    fn bend_rotates_tangent_toward_radial() {
        let mut b = OrderBuilder::new();
        b.bend(90.0, 1.0, MarkFlag::Arrow).unwrap();
        let order = b.finish(0.0);
        let PathMarker::Waypoint { tangent, radial, .. } = order[2] else {
            panic!("expected trailing waypoint");
        };
        // Tangent +X curves into +Y across a 90 degree bend.
        assert!((tangent - Vector3::y()).norm() < TOL, "tangent={tangent:?}");
        assert!((radial + Vector3::x()).norm() < TOL, "radial={radial:?}");
    }

    #[test]
    fn arc_advances_distance_by_arc_length() {
        let mut b = OrderBuilder::new();
        b.bend(90.0, 1.0, MarkFlag::Arrow).unwrap();
        let order = b.finish(0.0);
        let expected = std::f64::consts::FRAC_PI_2;
        assert!((order[2].distance() - expected).abs() < TOL);
    }

    #[test]
    fn roll_tilts_initial_radial() {
        let mut b = OrderBuilder::new();
        b.roll(std::f64::consts::FRAC_PI_2).unwrap();
        let order = b.finish(0.0);
        let PathMarker::Waypoint { radial, .. } = order[0] else {
            panic!("expected waypoint");
        };
        // +Y rolled a quarter turn about +X lands on +Z.
        assert!((radial - Vector3::z()).norm() < TOL, "radial={radial:?}");
    }
}
