//! Static parameter metadata: valid numeric ranges per unit system.
//!
//! The ranges clamp UI-entered values before they reach a calculator; the
//! calculators themselves assume already-validated inputs. Metric ranges are
//! in meters, standard ranges in feet (angles are in degrees either way).

use crate::config::UnitSystem;
use crate::model::param::ParamName;

/// Inclusive numeric bounds for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Looks up the valid range of an input parameter.
///
/// Returns `None` for output parameters and for inputs without a numeric
/// range (enumeration choices).
#[must_use]
pub fn range_for(name: ParamName, units: UnitSystem) -> Option<ParamRange> {
    let (metric, standard) = match name {
        ParamName::Angle => (ParamRange::new(1.0, 90.0), ParamRange::new(1.0, 90.0)),
        ParamName::OffsetHeight | ParamName::KickHeight | ParamName::ObstructionHeight => {
            (ParamRange::new(0.01, 3.0), ParamRange::new(0.05, 10.0))
        }
        ParamName::RollOffset | ParamName::ObstructionWidth | ParamName::Spacing => {
            (ParamRange::new(0.0, 3.0), ParamRange::new(0.0, 10.0))
        }
        ParamName::StubLength => (ParamRange::new(0.05, 3.0), ParamRange::new(0.2, 10.0)),
        ParamName::BendCount => (ParamRange::new(2.0, 30.0), ParamRange::new(2.0, 30.0)),
        ParamName::TargetRadius => (ParamRange::new(0.1, 30.0), ParamRange::new(0.3, 100.0)),
        _ => return None,
    };
    Some(match units {
        UnitSystem::Metric => metric,
        UnitSystem::Standard => standard,
    })
}

/// Clamps `value` to the parameter's range, if it has one.
#[must_use]
pub fn clamp_to_range(name: ParamName, units: UnitSystem, value: f64) -> f64 {
    match range_for(name, units) {
        Some(range) => value.clamp(range.min, range.max),
        None => value,
    }
}
