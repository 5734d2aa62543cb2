//! Rolled offset: the run must move both up and sideways, so the two-bend
//! offset is rolled about the conduit axis before bending.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, offset, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 30.0),
        BendParameter::float(ParamName::OffsetHeight, default_len(units, 0.2, 0.5)),
        BendParameter::float(ParamName::RollOffset, default_len(units, 0.15, 0.4)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::TotalOffset),
        BendParameter::angle_output(ParamName::RollAngle),
        BendParameter::output(ParamName::DistanceBetween),
        BendParameter::output(ParamName::Shrink),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let angle = inputs.angle(ParamName::Angle)?;
    let rise = inputs.float(ParamName::OffsetHeight)?;
    let roll = inputs.float(ParamName::RollOffset)?;
    let r = config.bender_radius;

    let total = rise.hypot(roll);
    let roll_angle = roll.atan2(rise);

    let arc = formula::arc_length(r, angle);
    let straight = formula::straight_for_rise(total - 2.0 * formula::bend_rise(r, angle), angle);

    if straight < 0.0 {
        return Ok(Calculation {
            outputs: vec![
                (ParamName::TotalOffset, ParamValue::Float(0.0)),
                (ParamName::RollAngle, ParamValue::Angle(0.0)),
                (ParamName::DistanceBetween, ParamValue::Float(0.0)),
                (ParamName::Shrink, ParamValue::Float(0.0)),
            ],
            order: straight_order(),
            alert: Some(offset::ALERT_TOO_CLOSE.into()),
        });
    }

    let developed = 2.0 * arc + straight;
    let run = 2.0 * formula::bend_run(r, angle) + formula::straight_run(straight, angle);

    let mut b = OrderBuilder::new();
    // Tilt the bend plane so the offset lands on the diagonal displacement.
    b.roll(-roll_angle)?;
    b.advance(START_MARGIN);
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;
    b.advance(straight);
    b.flip();
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::TotalOffset, ParamValue::Float(total)),
            (ParamName::RollAngle, ParamValue::Angle(roll_angle.to_degrees())),
            (ParamName::DistanceBetween, ParamValue::Float(arc + straight)),
            (ParamName::Shrink, ParamValue::Float(developed - run)),
        ],
        order: b.finish(END_MARGIN),
        alert: None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calc::BendKind;

    fn run(rise: f64, roll: f64) -> Calculation {
        let slots = vec![
            BendParameter::angle(ParamName::Angle, 30.0),
            BendParameter::float(ParamName::OffsetHeight, rise),
            BendParameter::float(ParamName::RollOffset, roll),
        ];
        BendKind::RolledOffset
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn total_offset_is_hypotenuse() {
        let calc = run(0.3, 0.4);
        assert!(calc.alert.is_none());
        let (_, ParamValue::Float(total)) = calc.outputs[0] else {
            panic!("expected float output");
        };
        assert!((total - 0.5).abs() < 1e-12, "total={total}");
    }

    #[test]
    fn roll_angle_covers_the_quadrant() {
        let calc = run(0.3, 0.3);
        let (_, ParamValue::Angle(deg)) = calc.outputs[1] else {
            panic!("expected angle output");
        };
        assert!((deg - 45.0).abs() < 1e-9, "deg={deg}");
    }

    #[test]
    fn pure_vertical_matches_plain_offset_distance() {
        let calc = run(0.3, 0.0);
        let slots = vec![
            BendParameter::angle(ParamName::Angle, 30.0),
            BendParameter::float(ParamName::OffsetHeight, 0.3),
        ];
        let plain = BendKind::Offset
            .calculate(&slots, &BendConfig::default())
            .unwrap();
        let (_, ParamValue::Float(rolled_d)) = calc.outputs[2] else {
            panic!("expected float output");
        };
        let (_, ParamValue::Float(plain_d)) = plain.outputs[0] else {
            panic!("expected float output");
        };
        assert!((rolled_d - plain_d).abs() < 1e-12);
    }
}
