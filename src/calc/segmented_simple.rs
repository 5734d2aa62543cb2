//! Segmented run, simple method: the total angle split evenly across N
//! bends, with the mark spacing refined by a bounded hill-climbing search
//! until the achieved sweep radius matches the target.

use crate::config::{BendConfig, UnitSystem};
use crate::error::Result;
use crate::formula;
use crate::model::{BendParameter, MarkFlag, OrderBuilder, ParamName, ParamValue};

use super::{default_len, straight_order, Calculation, Inputs, END_MARGIN, START_MARGIN};

pub(crate) const ALERT_RADIUS_TOO_SMALL: &str =
    "Desired radius must be larger than the bender radius.";
pub(crate) const ALERT_BAD_COUNT: &str = "Number of Bends must be at least 1.";

/// Convergence tolerance on the achieved radius.
const RADIUS_TOLERANCE: f64 = 0.001;
/// Hard iteration cap; reaching it yields the best value found, no alert.
const MAX_ITERATIONS: usize = 1000;

pub(crate) fn inputs(units: UnitSystem) -> Vec<BendParameter> {
    vec![
        BendParameter::angle(ParamName::Angle, 90.0),
        BendParameter::integer(ParamName::BendCount, 4),
        BendParameter::float(ParamName::TargetRadius, default_len(units, 1.0, 3.0)),
    ]
}

pub(crate) fn outputs() -> Vec<BendParameter> {
    vec![
        BendParameter::angle_output(ParamName::AnglePerBend),
        BendParameter::output(ParamName::MarkSpacing),
        BendParameter::output(ParamName::AchievedRadius),
        BendParameter::output(ParamName::DevelopedLength),
    ]
}

pub(crate) fn calculate(inputs: &Inputs, config: &BendConfig) -> Result<Calculation> {
    let total = inputs.angle(ParamName::Angle)?;
    let count = inputs.integer(ParamName::BendCount)?;
    let target = inputs.float(ParamName::TargetRadius)?;
    let r = config.bender_radius;

    if count < 1 {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(ALERT_BAD_COUNT.into()),
        });
    }
    if target <= r {
        return Ok(Calculation {
            outputs: zeroed(),
            order: straight_order(),
            alert: Some(ALERT_RADIUS_TOO_SMALL.into()),
        });
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let n = count as usize;
    let step = total / to_f64(n);
    let initial = target * step;
    let search = solve_spacing(r, total, n, target, initial);

    let arc = formula::arc_length(r, step);
    let developed = to_f64(n) * arc + to_f64(n - 1) * search.spacing;

    let mut b = OrderBuilder::new();
    b.advance(START_MARGIN);
    for i in 0..n {
        if i > 0 {
            b.advance(search.spacing);
        }
        let mark = if i == 0 { MarkFlag::Arrow } else { MarkFlag::Star };
        b.bend(step.to_degrees(), r, mark)?;
    }

    Ok(Calculation {
        outputs: vec![
            (ParamName::AnglePerBend, ParamValue::Angle(step.to_degrees())),
            (ParamName::MarkSpacing, ParamValue::Float(arc + search.spacing)),
            (ParamName::AchievedRadius, ParamValue::Float(search.achieved)),
            (ParamName::DevelopedLength, ParamValue::Float(developed)),
        ],
        order: b.finish(END_MARGIN),
        alert: None,
    })
}

fn zeroed() -> Vec<(ParamName, ParamValue)> {
    vec![
        (ParamName::AnglePerBend, ParamValue::Angle(0.0)),
        (ParamName::MarkSpacing, ParamValue::Float(0.0)),
        (ParamName::AchievedRadius, ParamValue::Float(0.0)),
        (ParamName::DevelopedLength, ParamValue::Float(0.0)),
    ]
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}

/// Outcome of the spacing search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpacingSearch {
    pub spacing: f64,
    pub achieved: f64,
    pub iterations: usize,
}

/// Sweep radius achieved by `count` equal-angle bend segments separated by
/// `spacing`: the accumulated horizontal run divided by `sin(total)`.
pub(crate) fn achieved_radius(
    bender_radius: f64,
    total: f64,
    count: usize,
    spacing: f64,
) -> f64 {
    let step = total / to_f64(count);
    let mut heading = 0.0;
    let mut run = 0.0;
    for i in 0..count {
        run += bender_radius * ((heading + step).sin() - heading.sin());
        heading += step;
        if i + 1 < count {
            run += spacing * heading.cos();
        }
    }
    run / total.sin()
}

/// Refines the spacing by a deterministic hill climb: walk toward the
/// target, halve the step whenever the direction reverses, stop inside the
/// tolerance or at the iteration cap.
///
/// Convergence is checked before the first move, so re-running with a
/// previous result converges immediately.
pub(crate) fn solve_spacing(
    bender_radius: f64,
    total: f64,
    count: usize,
    target: f64,
    initial: f64,
) -> SpacingSearch {
    let mut spacing = initial;
    let mut step = (initial * 0.5).max(RADIUS_TOLERANCE);
    let mut achieved = achieved_radius(bender_radius, total, count, spacing);
    let mut best = SpacingSearch {
        spacing,
        achieved,
        iterations: 0,
    };
    let mut prev_dir: f64 = 0.0;

    for iteration in 1..=MAX_ITERATIONS {
        if (achieved - target).abs() <= RADIUS_TOLERANCE {
            return best;
        }
        let dir = if achieved < target { 1.0 } else { -1.0 };
        if prev_dir != 0.0 && (dir - prev_dir).abs() > f64::EPSILON {
            step *= 0.5;
        }
        prev_dir = dir;
        spacing = (spacing + dir * step).max(0.0);
        achieved = achieved_radius(bender_radius, total, count, spacing);
        if (achieved - target).abs() < (best.achieved - target).abs() {
            best = SpacingSearch {
                spacing,
                achieved,
                iterations: iteration,
            };
        } else {
            best.iterations = iteration;
        }
    }
    best
}
