//! Two-bend offset: shift a run sideways by a given height and continue
//! parallel to the original direction.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) const ALERT_TOO_CLOSE: &str = "Bends are too close.";

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 30.0),
        BendParameter::float(ParamName::OffsetHeight, default_len(units, 0.2, 0.5)),
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
    let angle = inputs.angle(ParamName::Angle)?;
    let height = inputs.float(ParamName::OffsetHeight)?;
    let r = config.bender_radius;

    let arc = formula::arc_length(r, angle);
    let rise = height - 2.0 * formula::bend_rise(r, angle);
    let straight = formula::straight_for_rise(rise, angle);
    let distance_between = arc + straight;

    if distance_between - arc < 0.0 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(ALERT_TOO_CLOSE.into()),
        });
    }

    let developed = 2.0 * arc + straight;
    let run = 2.0 * formula::bend_run(r, angle) + formula::straight_run(straight, angle);
    let shrink = developed - run;

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;
    b.advance(straight);
    b.flip();
    b.bend(angle.to_degrees(), r, MarkFlag::Arrow)?;

    Ok(Calculation {
        outputs: vec![
            (ParamName::DistanceBetween, ParamValue::Float(distance_between)),
            (ParamName::Shrink, ParamValue::Float(shrink)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
            (ParamName::HorizontalRun, ParamValue::Float(run)),
        ],
        order: b.finish(END_MARGIN),
        alert: None,
    })
}

fn zeroed() -> Vec<(ParamName, ParamValue)> {
    vec![
        (ParamName::DistanceBetween, ParamValue::Float(0.0)),
        (ParamName::Shrink, ParamValue::Float(0.0)),
        (ParamName::DevelopedLength, ParamValue::Float(0.0)),
        (ParamName::HorizontalRun, ParamValue::Float(0.0)),
    ]
}
