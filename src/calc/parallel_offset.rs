//! Offset for a group of parallel runs: the two-bend offset shape plus the
//! per-conduit mark shift that keeps the bends of adjacent runs aligned.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, offset, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 30.0),
        BendParameter::float(ParamName::OffsetHeight, default_len(units, 0.2, 0.5)),
        BendParameter::float(ParamName::Spacing, default_len(units, 0.05, 0.2)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::DistanceBetween),
        BendParameter::output(ParamName::Shrink),
        BendParameter::output(ParamName::MarkShift),
        BendParameter::output(ParamName::DevelopedLength),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let angle = inputs.angle(ParamName::Angle)?;
    let height = inputs.float(ParamName::OffsetHeight)?;
    let spacing = inputs.float(ParamName::Spacing)?;
    let r = config.bender_radius;

    let arc = formula::arc_length(r, angle);
    let rise = height - 2.0 * formula::bend_rise(r, angle);
    let straight = formula::straight_for_rise(rise, angle);

    if straight < 0.0 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(offset::ALERT_TOO_CLOSE.into()),
        });
    }

    let distance_between = arc + straight;
    let developed = 2.0 * arc + straight;
    let run = 2.0 * formula::bend_run(r, angle) + formula::straight_run(straight, angle);
    // Adjacent runs keep their bends on a common line when each mark moves
    // by the spacing's setback.
    let mark_shift = formula::setback(spacing, angle);

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;
    b.advance(straight);
    b.flip();
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::DistanceBetween, ParamValue::Float(distance_between)),
            (ParamName::Shrink, ParamValue::Float(developed - run)),
            (ParamName::MarkShift, ParamValue::Float(mark_shift)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
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

    fn run(angle_deg: f64, height: f64, spacing: f64) -> Calculation {
        let slots = vec![
            BendParameter::angle(ParamName::Angle, angle_deg),
            BendParameter::float(ParamName::OffsetHeight, height),
            BendParameter::float(ParamName::Spacing, spacing),
        ];
        BendKind::ParallelOffset
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn mark_shift_is_spacing_setback() {
        let calc = run(30.0, 0.3, 0.1);
        assert!(calc.alert.is_none());
        let (_, ParamValue::Float(shift)) = calc.outputs[2] else {
            panic!("expected float output");
        };
        let expected = 0.1 * (15f64.to_radians()).tan();
        assert!((shift - expected).abs() < 1e-12, "shift={shift}");
    }

    #[test]
    fn infeasible_height_alerts() {
        let calc = run(30.0, 0.05, 0.1);
        assert_eq!(calc.alert.as_deref(), Some(offset::ALERT_TOO_CLOSE));
    }
}
