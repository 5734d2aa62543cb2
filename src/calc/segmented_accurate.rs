//! Segmented run, accurate method: half-angle first and last bends put
//! every bend vertex exactly on the desired circle, so the spacing follows
//! from a closed-form chord instead of an iterative search.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, segmented_simple, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) const ALERT_TOO_FEW_BENDS: &str = "Accurate Method requires at least 3 Bends";

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 90.0),
        BendParameter::integer(ParamName::BendCount, 5),
        BendParameter::float(ParamName::TargetRadius, default_len(units, 1.0, 3.0)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::angle_output(ParamName::FirstLastAngle),
        BendParameter::angle_output(ParamName::MiddleAngle),
        BendParameter::output(ParamName::MarkSpacing),
        BendParameter::output(ParamName::DevelopedLength),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let total = inputs.angle(ParamName::Angle)?;
    let count = inputs.integer(ParamName::BendCount)?;
    let target = inputs.float(ParamName::TargetRadius)?;
    let r = config.bender_radius;

    if count < 3 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(ALERT_TOO_FEW_BENDS.into()),
        });
    }
    if target <= r {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(segmented_simple::ALERT_RADIUS_TOO_SMALL.into()),
        });
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let n = count as usize;
    let step = total / to_f64(n - 1);
    let half = step / 2.0;

    // A half bend's arc start sits this far off the vertex circle.
    let half_run = formula::bend_run(r, half);
    let half_rise = formula::bend_rise(r, half);
    // Angle subtended between consecutive arc-start points, corrected for
    // the part each half bend consumes.
    let mid_angle = step - 2.0 * (half_run / (target - half_rise)).atan();
    let start_radius = (target - half_rise).hypot(half_run);
    let spacing = formula::chord_length(start_radius, mid_angle);

    let half_arc = formula::arc_length(r, half);
    let full_arc = formula::arc_length(r, step);
    let developed = 2.0 * half_arc + to_f64(n - 2) * full_arc + to_f64(n - 1) * spacing;

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(half.to_degrees(), r, MarkFlag::Arrow)?;
    for _ in 0..n - 2 {
        b.advance(spacing);
        b.bend(step.to_degrees(), r, MarkFlag::Star)?;
    }
    b.advance(spacing);
    b.bend(half.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::FirstLastAngle, ParamValue::Angle(half.to_degrees())),
            (ParamName::MiddleAngle, ParamValue::Angle(step.to_degrees())),
            (ParamName::MarkSpacing, ParamValue::Float(spacing)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
        ],
        order: b.finish(END_MARGIN),
        alert: None,
    })
}

fn zeroed() -> Vec<(ParamName, ParamValue)> {
    vec![
        (ParamName::FirstLastAngle, ParamValue::Angle(0.0)),
        (ParamName::MiddleAngle, ParamValue::Angle(0.0)),
        (ParamName::MarkSpacing, ParamValue::Float(0.0)),
        (ParamName::DevelopedLength, ParamValue::Float(0.0)),
    ]
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calc::BendKind;

    fn run(count: i64, target: f64) -> Calculation {
        let slots = vec![
            BendParameter::angle(ParamName::Angle, 90.0),
            BendParameter::integer(ParamName::BendCount, count),
            BendParameter::float(ParamName::TargetRadius, target),
        ];
        BendKind::SegmentedAccurate
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn two_bends_alert_without_crashing() {
        let calc = run(2, 1.0);
        assert_eq!(calc.alert.as_deref(), Some(ALERT_TOO_FEW_BENDS));
        for (_, value) in &calc.outputs {
            match value {
                ParamValue::Float(v) | ParamValue::Angle(v) => assert!(v.abs() < 1e-12),
                _ => panic!("unexpected output kind"),
            }
        }
    }

    #[test]
    fn first_and_last_bends_take_half_the_step() {
        let calc = run(5, 1.0);
        assert!(calc.alert.is_none());
        let (_, ParamValue::Angle(half)) = calc.outputs[0] else {
            panic!("expected angle output");
        };
        let (_, ParamValue::Angle(mid)) = calc.outputs[1] else {
            panic!("expected angle output");
        };
        assert!((mid - 22.5).abs() < 1e-12, "mid={mid}");
        assert!((half - 11.25).abs() < 1e-12, "half={half}");
    }

    #[test]
    fn arc_angles_sum_to_the_total() {
        let calc = run(6, 1.0);
        let sum: f64 = calc
            .order
            .iter()
            .filter_map(|m| match m {
                crate::model::PathMarker::BendArc { angle_deg, .. } => Some(*angle_deg),
                crate::model::PathMarker::Waypoint { .. } => None,
            })
            .sum();
        assert!((sum - 90.0).abs() < 1e-9, "sum={sum}");
    }

    #[test]
    fn spacing_tracks_the_vertex_chord_for_large_targets() {
        // For a target much larger than the bender radius the correction is
        // small and the spacing approaches the plain vertex chord.
        let target = 10.0;
        let calc = run(5, target);
        let (_, ParamValue::Float(spacing)) = calc.outputs[2] else {
            panic!("expected float output");
        };
        let step = 90f64.to_radians() / 4.0;
        let chord = formula::chord_length(target, step);
        assert!((spacing - chord).abs() / chord < 0.1, "spacing={spacing} chord={chord}");
    }

    #[test]
    fn small_target_radius_alerts() {
        let calc = run(5, 0.2);
        assert_eq!(
            calc.alert.as_deref(),
            Some(segmented_simple::ALERT_RADIUS_TOO_SMALL)
        );
    }
}
