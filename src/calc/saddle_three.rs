//! 3-point saddle: a center bend over the obstruction flanked by two
//! half-angle bends, symmetric about the center notch.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, offset, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 45.0),
        BendParameter::float(ParamName::ObstructionHeight, default_len(units, 0.1, 0.3)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::DistanceBetween),
        BendParameter::output(ParamName::Shrink),
        BendParameter::output(ParamName::DevelopedLength),
        BendParameter::output(ParamName::HorizontalRun),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let center_angle = inputs.angle(ParamName::Angle)?;
    let height = inputs.float(ParamName::ObstructionHeight)?;
    let r = config.bender_radius;
    let half = center_angle / 2.0;

    let rise = height - 2.0 * formula::bend_rise(r, half);
    let straight = formula::straight_for_rise(rise, half);

    if straight < 0.0 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(offset::ALERT_TOO_CLOSE.into()),
        });
    }

    let half_arc = formula::arc_length(r, half);
    // Outer mark to the center notch: the outer arc, the climb, and half of
    // the center arc up to its apex.
    let distance_between = 2.0 * half_arc + straight;
    let half_developed = 2.0 * half_arc + straight;
    let half_run = 2.0 * formula::bend_run(r, half) + formula::straight_run(straight, half);
    let developed = 2.0 * half_developed;
    let run = 2.0 * half_run;

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(half.to_degrees(), r, MarkFlag::Arrow)?;
    b.advance(straight);
    b.flip();
    b.bend(center_angle.to_degrees(), r, MarkFlag::Notch)?;
    b.advance(straight);
    b.flip();
    b.bend(half.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::DistanceBetween, ParamValue::Float(distance_between)),
            (ParamName::Shrink, ParamValue::Float(developed - run)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
            (ParamName::HorizontalRun, ParamValue::Float(run)),
        ],
        order: b.finish(END_MARGIN),
        alert: None,
    })
}

fn zeroed() -> Vec<(ParamName, ParamValue)> {
    outputs()
        .into_iter()
        .map(|p| (p.name, ParamValue::Float(0.0)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calc::BendKind;
    use crate::model::PathMarker;

    fn run(angle_deg: f64, height: f64) -> Calculation {
        let slots = vec![
            BendParameter::angle(ParamName::Angle, angle_deg),
            BendParameter::float(ParamName::ObstructionHeight, height),
        ];
        BendKind::ThreePointSaddle
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn order_is_arrow_notch_arrow() {
        let calc = run(45.0, 0.15);
        assert!(calc.alert.is_none());
        let marks: Vec<_> = calc
            .order
            .iter()
            .filter_map(|m| match m {
                PathMarker::BendArc { mark, .. } => Some(*mark),
                PathMarker::Waypoint { .. } => None,
            })
            .collect();
        assert_eq!(marks, vec![MarkFlag::Arrow, MarkFlag::Notch, MarkFlag::Arrow]);
    }

    #[test]
    fn center_arc_carries_the_full_angle() {
        let calc = run(45.0, 0.15);
        let arcs: Vec<_> = calc
            .order
            .iter()
            .filter_map(|m| match m {
                PathMarker::BendArc { angle_deg, .. } => Some(*angle_deg),
                PathMarker::Waypoint { .. } => None,
            })
            .collect();
        assert!((arcs[0] - 22.5).abs() < 1e-12);
        assert!((arcs[1] - 45.0).abs() < 1e-12);
        assert!((arcs[2] - 22.5).abs() < 1e-12);
    }

    #[test]
    fn shallow_obstruction_alerts() {
        let calc = run(45.0, 0.01);
        assert_eq!(calc.alert.as_deref(), Some(offset::ALERT_TOO_CLOSE));
    }
}
