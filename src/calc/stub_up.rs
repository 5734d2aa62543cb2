//! Stub-up: a single fixed 90 degree bend measured from the pipe end.

use std::f64::consts::FRAC_PI_2;

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) const ALERT_STUB_TOO_SHORT: &str = "Stub is shorter than the take-up.";

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![BendParameter::float(
        ParamName::StubLength,
        default_len(units, 0.5, 1.5),
    )]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::output(ParamName::StubTakeUp),
        BendParameter::output(ParamName::DistanceFromEnd),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let stub = inputs.float(ParamName::StubLength)?;
    let r = config.bender_radius;

    let take_up = formula::bend_rise(r, FRAC_PI_2) + config.conduit_radius();
    let from_end = stub - take_up;

    let (from_end, alert) = if from_end < 0.0 {
        (0.0, Some(ALERT_STUB_TOO_SHORT.into()))
    } else {
        (from_end, None)
    };

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    b.bend(90.0, r, MarkFlag::Arrow)?;
    // The leg past the bend brings the stub tip to the requested height.
    let tail = if from_end > 0.0 { from_end } else { END_MARGIN };

    Ok(Calculation {
        outputs: vec![
            (ParamName::StubTakeUp, ParamValue::Float(take_up)),
            (ParamName::DistanceFromEnd, ParamValue::Float(from_end)),
        ],
        order: b.finish(tail),
        alert,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calc::BendKind;

    fn run(stub: f64) -> Calculation {
        let slots = vec![BendParameter::float(ParamName::StubLength, stub)];
        BendKind::StubUp
            .calculate(&slots, &BendConfig::default())
            .unwrap()
    }

    #[test]
    fn half_meter_stub_scenario() {
        let config = BendConfig::default();
        let calc = run(0.5);
        assert!(calc.alert.is_none());

        let expected_take_up =
            formula::bend_rise(config.bender_radius, FRAC_PI_2) + config.conduit_radius();
        let (_, ParamValue::Float(take_up)) = calc.outputs[0] else {
            panic!("expected float output");
        };
        let (_, ParamValue::Float(from_end)) = calc.outputs[1] else {
            panic!("expected float output");
        };
        assert!((take_up - expected_take_up).abs() < 1e-12);
        assert!((from_end - (0.5 - expected_take_up)).abs() < 1e-12);
    }

    #[test]
    fn short_stub_alerts_and_degrades() {
        let calc = run(0.1);
        assert_eq!(calc.alert.as_deref(), Some(ALERT_STUB_TOO_SHORT));
        let (_, ParamValue::Float(from_end)) = calc.outputs[1] else {
            panic!("expected float output");
        };
        assert!(from_end.abs() < 1e-12);
        // The preview still carries the 90 degree bend.
        assert_eq!(calc.order.len(), 3);
    }

    #[test]
    fn take_up_is_reported_even_when_degraded() {
        let calc = run(0.1);
        let (_, ParamValue::Float(take_up)) = calc.outputs[0] else {
            panic!("expected float output");
        };
        assert!(take_up > 0.0);
    }
}
