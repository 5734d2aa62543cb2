//! Per-type bend calculators.
//!
//! Each bend type is one variant of the closed [`BendKind`] enum, carrying
//! its parameter schema and its calculation routine behind the common
//! `calculate(inputs, config) -> Calculation` contract. Domain
//! infeasibility never fails a calculation: the routine completes with
//! degraded (zeroed) outputs and a descriptive alert string.

mod offset;
mod parallel_kick;
mod parallel_offset;
mod rolled_offset;
mod saddle_four;
mod saddle_three;
mod segmented_accurate;
mod segmented_simple;
mod stub_up;

use crate::config::{BendConfig, UnitSystem};
use crate::error::{ModelError, Result};
use crate::model::{Bend, BendParameter, ParamName, ParamValue, PathMarker};

/// Straight lead from the pipe start to the first bend.
pub(crate) const START_MARGIN: f64 = 0.2;
/// Straight tail past the last bend.
pub(crate) const END_MARGIN: f64 = 0.2;

/// Result of one calculator run.
#[derive(Debug)]
pub struct Calculation {
    /// Output values, in slot order.
    pub outputs: Vec<(ParamName, ParamValue)>,
    /// The rebuilt conduit order.
    pub order: Vec<PathMarker>,
    /// Domain-infeasibility message, if any.
    pub alert: Option<String>,
}

/// The closed set of bend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendKind {
    Offset,
    ParallelOffset,
    RolledOffset,
    ThreePointSaddle,
    FourPointSaddle,
    ParallelKick,
    StubUp,
    SegmentedSimple,
    SegmentedAccurate,
}

impl BendKind {
    /// Runs this type's calculation routine.
    ///
    /// # Errors
    ///
    /// Returns an error only for calculator defects: a missing input slot,
    /// a kind mismatch, or a degenerate running frame. Infeasible user
    /// geometry lands in [`Calculation::alert`] instead.
    pub fn calculate(self, inputs: &[BendParameter], config: &BendConfig) -> Result<Calculation> {
        let inputs = Inputs(inputs);
        match self {
            Self::Offset => offset::calculate(&inputs, config),
            Self::ParallelOffset => parallel_offset::calculate(&inputs, config),
            Self::RolledOffset => rolled_offset::calculate(&inputs, config),
            Self::ThreePointSaddle => saddle_three::calculate(&inputs, config),
            Self::FourPointSaddle => saddle_four::calculate(&inputs, config),
            Self::ParallelKick => parallel_kick::calculate(&inputs, config),
            Self::StubUp => stub_up::calculate(&inputs, config),
            Self::SegmentedSimple => segmented_simple::calculate(&inputs, config),
            Self::SegmentedAccurate => segmented_accurate::calculate(&inputs, config),
        }
    }

    /// This type's parameter schema under the given unit system.
    #[must_use]
    pub fn schema(self, units: UnitSystem) -> (Vec<BendParameter>, Vec<BendParameter>) {
        match self {
            Self::Offset => (offset::inputs(units), offset::outputs()),
            Self::ParallelOffset => (parallel_offset::inputs(units), parallel_offset::outputs()),
            Self::RolledOffset => (rolled_offset::inputs(units), rolled_offset::outputs()),
            Self::ThreePointSaddle => (saddle_three::inputs(units), saddle_three::outputs()),
            Self::FourPointSaddle => (saddle_four::inputs(units), saddle_four::outputs()),
            Self::ParallelKick => (parallel_kick::inputs(units), parallel_kick::outputs()),
            Self::StubUp => (stub_up::inputs(units), stub_up::outputs()),
            Self::SegmentedSimple => (segmented_simple::inputs(units), segmented_simple::outputs()),
            Self::SegmentedAccurate => {
                (segmented_accurate::inputs(units), segmented_accurate::outputs())
            }
        }
    }

    /// Builds a configured [`Bend`] with this type's schema embedded.
    ///
    /// # Errors
    ///
    /// Returns an error if embedding fails (cannot happen on a fresh bend;
    /// propagated rather than swallowed).
    pub fn instantiate(self, type_name: &str, units: UnitSystem) -> Result<Bend> {
        let (inputs, outputs) = self.schema(units);
        let mut bend = Bend::new(type_name, self);
        bend.embed_inputs(inputs)?;
        bend.embed_outputs(outputs)?;
        Ok(bend)
    }
}

/// Read-only, checked view over a bend's input slots.
pub(crate) struct Inputs<'a>(&'a [BendParameter]);

impl Inputs<'_> {
    fn get(&self, name: ParamName) -> Result<&BendParameter> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ModelError::UnknownParameter { role: "input", name }.into())
    }

    /// Angle input in radians.
    pub(crate) fn angle(&self, name: ParamName) -> Result<f64> {
        self.get(name)?
            .value
            .as_radians()
            .ok_or_else(|| ModelError::KindMismatch { name }.into())
    }

    pub(crate) fn float(&self, name: ParamName) -> Result<f64> {
        self.get(name)?
            .value
            .as_float()
            .ok_or_else(|| ModelError::KindMismatch { name }.into())
    }

    pub(crate) fn integer(&self, name: ParamName) -> Result<i64> {
        self.get(name)?
            .value
            .as_integer()
            .ok_or_else(|| ModelError::KindMismatch { name }.into())
    }

    pub(crate) fn choice(&self, name: ParamName) -> Result<usize> {
        self.get(name)?
            .value
            .as_enum_index()
            .ok_or_else(|| ModelError::KindMismatch { name }.into())
    }
}

/// Picks the schema default matching the active unit system.
pub(crate) fn default_len(units: UnitSystem, metric: f64, standard: f64) -> f64 {
    match units {
        UnitSystem::Metric => metric,
        UnitSystem::Standard => standard,
    }
}

/// A degraded conduit order: a plain straight run, used when the requested
/// geometry is infeasible and the outputs are zeroed.
pub(crate) fn straight_order() -> Vec<PathMarker> {
    crate::model::OrderBuilder::new().finish(START_MARGIN + END_MARGIN)
}
