//! Parallel kick: a kick bend ahead of a 90 degree stub, pushing the
//! vertical leg sideways to land in a parallel run.

use std::f64::consts::FRAC_PI_2;

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) const ALERT_KICK_TOO_CLOSE: &str = "Kick is too close to the bend.";

/// Choice indices for the kick direction enumeration.
pub(crate) const KICK_DIRECTIONS: [&str; 2] = ["Left", "Right"];

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 22.5),
        BendParameter::float(ParamName::KickHeight, default_len(units, 0.15, 0.5)),
        BendParameter::float(ParamName::Spacing, default_len(units, 0.05, 0.2)),
        BendParameter::choice(ParamName::KickDirection, 0),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::Travel),
        BendParameter::output(ParamName::FirstMark),
        BendParameter::output(ParamName::MarkShift),
        BendParameter::output(ParamName::DevelopedLength),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let angle = inputs.angle(ParamName::Angle)?;
    let kick = inputs.float(ParamName::KickHeight)?;
    let spacing = inputs.float(ParamName::Spacing)?;
    let direction = inputs.choice(ParamName::KickDirection)?;
    let r = config.bender_radius;

    let travel = formula::straight_for_rise(kick, angle);
    // The kick arc eats part of the run toward the 90; the complementary
    // forms measure it against the upcoming vertical leg.
    let first_mark = travel - formula::kick_run(r, angle) - formula::kick_rise(r, angle);
    let min_first_mark = formula::setback(r, FRAC_PI_2) + formula::setback(r, angle);

    let (first_mark, alert) = if first_mark < min_first_mark {
        (min_first_mark, Some(ALERT_KICK_TOO_CLOSE.into()))
    } else {
        (first_mark, None)
    };

    let mark_shift = formula::setback(spacing, angle);
    let developed =
        formula::arc_length(r, angle) + first_mark + formula::arc_length(r, FRAC_PI_2);

    let roll = if direction == 0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    // Kick sideways, then roll the handle back up for the 90.
    b.roll(roll)?;
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;
    b.roll(-roll)?;
    b.advance(first_mark);
    b.bend(90.0, r, MarkFlag::Star)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::Travel, ParamValue::Float(travel)),
            (ParamName::FirstMark, ParamValue::Float(first_mark)),
            (ParamName::MarkShift, ParamValue::Float(mark_shift)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
        ],
        order: b.finish(END_MARGIN),
        alert,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calc::BendKind;
    use crate::model::PathMarker;

    fn run(angle_deg: f64, kick: f64, spacing: f64) -> Calculation {
        let slots = vec![
            BendParameter::angle(ParamName::Angle, angle_deg),
            BendParameter::float(ParamName::KickHeight, kick),
            BendParameter::float(ParamName::Spacing, spacing),
            BendParameter::choice(ParamName::KickDirection, 0),
        ];
        BendKind::ParallelKick
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn travel_is_kick_over_sine() {
        let calc = run(22.5, 0.3, 0.1);
        let (_, ParamValue::Float(travel)) = calc.outputs[0] else {
            panic!("expected float output");
        };
        let expected = 0.3 / (22.5f64.to_radians()).sin();
        assert!((travel - expected).abs() < 1e-12, "travel={travel}");
    }

    #[test]
    fn tight_kick_clamps_first_mark_and_alerts() {
        let calc = run(22.5, 0.05, 0.1);
        assert_eq!(calc.alert.as_deref(), Some(ALERT_KICK_TOO_CLOSE));
        let (_, ParamValue::Float(first)) = calc.outputs[1] else {
            panic!("expected float output");
        };
        let r = BendConfig::default().bender_radius;
        let min = formula::setback(r, FRAC_PI_2) + formula::setback(r, 22.5f64.to_radians());
        assert!((first - min).abs() < 1e-12, "first={first}");
    }

    #[test]
    fn order_ends_with_a_ninety() {
        let calc = run(22.5, 0.3, 0.1);
        let arcs: Vec<_> = calc
            .order
            .iter()
            .filter_map(|m| match m {
                PathMarker::BendArc { angle_deg, mark, .. } => Some((*angle_deg, *mark)),
                PathMarker::Waypoint { .. } => None,
            })
            .collect();
        assert_eq!(arcs.len(), 2);
        assert!((arcs[0].0 - 22.5).abs() < 1e-12);
        assert_eq!(arcs[0].1, MarkFlag::Arrow);
        assert!((arcs[1].0 - 90.0).abs() < 1e-12);
        assert_eq!(arcs[1].1, MarkFlag::Star);
    }

    #[test]
    fn direction_choice_mirrors_the_kick() {
        let slots = |dir: usize| {
            vec![
                BendParameter::angle(ParamName::Angle, 22.5),
                BendParameter::float(ParamName::KickHeight, 0.3),
                BendParameter::float(ParamName::Spacing, 0.1),
                BendParameter::choice(ParamName::KickDirection, dir),
            ]
        };
        let config = BendConfig::default();
        let left = BendKind::ParallelKick.calculate(&slots(0), &config).unwrap();
        let right = BendKind::ParallelKick.calculate(&slots(1), &config).unwrap();
        let radial_of = |calc: &Calculation| match calc.order[1] {
            PathMarker::BendArc { radial, .. } => radial,
            PathMarker::Waypoint { .. } => panic!("expected arc"),
        };
        let l = radial_of(&left);
        let r = radial_of(&right);
        assert!((l + r).norm() < 1e-10, "l={l:?} r={r:?}");
        assert_eq!(KICK_DIRECTIONS.len(), 2);
    }
}
