//! 4-point saddle: an offset up, a level run across the obstruction, and an
//! offset back down.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, offset, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 30.0),
        BendParameter::float(ParamName::ObstructionHeight, default_len(units, 0.15, 0.4)),
        BendParameter::float(ParamName::ObstructionWidth, default_len(units, 0.3, 1.0)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::DistanceBetween),
        BendParameter::output(ParamName::DistanceAcross),
        BendParameter::output(ParamName::Shrink),
        BendParameter::output(ParamName::DevelopedLength),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let angle = inputs.angle(ParamName::Angle)?;
    let height = inputs.float(ParamName::ObstructionHeight)?;
    let width = inputs.float(ParamName::ObstructionWidth)?;
    let r = config.bender_radius;

    let rise = height - 2.0 * formula::bend_rise(r, angle);
    let straight = formula::straight_for_rise(rise, angle);

    if straight < 0.0 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(offset::ALERT_TOO_CLOSE.into()),
        });
    }

    let arc = formula::arc_length(r, angle);
    let distance_between = arc + straight;
    // Marks of the two inner bends sit one arc plus the level run apart.
    let distance_across = arc + width;
    let offset_developed = 2.0 * arc + straight;
    let offset_run = 2.0 * formula::bend_run(r, angle) + formula::straight_run(straight, angle);
    let developed = 2.0 * offset_developed + width;
    let shrink = 2.0 * (offset_developed - offset_run);

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;
    b.advance(straight);
    b.flip();
    b.bend(angle.to_degrees(), r, MarkFlag::Star)?;
    b.advance(width);
    b.bend(angle.to_degrees(), r, MarkFlag::Star)?;
    b.advance(straight);
    b.flip();
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::DistanceBetween, ParamValue::Float(distance_between)),
            (ParamName::DistanceAcross, ParamValue::Float(distance_across)),
            (ParamName::Shrink, ParamValue::Float(shrink)),
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
