use crate::calc::BendKind;
use crate::config::BendConfig;
use crate::error::{ModelError, Result};

use super::param::{BendParameter, ParamName, ParamValue};
use super::path::PathMarker;

/// Lifecycle state of a [`Bend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendState {
    /// No parameter slots embedded yet.
    Uninitialized,
    /// Inputs and outputs embedded, calculator bound, nothing computed.
    Configured,
    /// Outputs and conduit order reflect the current inputs.
    Calculated,
}

/// Reference to a single parameter slot of a bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRef {
    Input(usize),
    Output(usize),
}

/// Notification raised by a state-changing bend operation.
///
/// The kernel is synchronous and pull-based: operations return the event
/// for the caller (the UI/session layer) to fan out, rather than invoking
/// callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendEvent {
    Recalculated,
    HighlightChanged,
}

/// Runtime model of one bending operation.
///
/// Owns its parameter slots, the computed conduit order, and the optional
/// domain-infeasibility alert. Inputs and outputs are embedded exactly once
/// at construction; their length and order never change afterward.
#[derive(Debug)]
pub struct Bend {
    type_name: String,
    kind: BendKind,
    inputs: Vec<BendParameter>,
    outputs: Vec<BendParameter>,
    inputs_embedded: bool,
    outputs_embedded: bool,
    calculated: bool,
    conduit_order: Vec<PathMarker>,
    alert: Option<String>,
    highlighted: Option<ParamRef>,
}

impl Bend {
    /// Creates an uninitialized bend bound to a calculator.
    #[must_use]
    pub fn new(type_name: impl Into<String>, kind: BendKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
            inputs_embedded: false,
            outputs_embedded: false,
            calculated: false,
            conduit_order: Vec::new(),
            alert: None,
            highlighted: None,
        }
    }

    /// Embeds the input slots. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Reinitialization`] if inputs are already
    /// embedded.
    pub fn embed_inputs(&mut self, inputs: Vec<BendParameter>) -> Result<()> {
        if self.inputs_embedded {
            return Err(ModelError::Reinitialization("inputs").into());
        }
        self.inputs = inputs;
        self.inputs_embedded = true;
        Ok(())
    }

    /// Embeds the output slots. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Reinitialization`] if outputs are already
    /// embedded.
    pub fn embed_outputs(&mut self, outputs: Vec<BendParameter>) -> Result<()> {
        if self.outputs_embedded {
            return Err(ModelError::Reinitialization("outputs").into());
        }
        self.outputs = outputs;
        self.outputs_embedded = true;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> BendState {
        if !(self.inputs_embedded && self.outputs_embedded) {
            BendState::Uninitialized
        } else if self.calculated {
            BendState::Calculated
        } else {
            BendState::Configured
        }
    }

    /// Writes an input value and recomputes outputs and conduit order.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown input name, a value whose variant
    /// does not match the slot's kind, or a calculator defect.
    pub fn set_input(
        &mut self,
        name: ParamName,
        value: ParamValue,
        config: &BendConfig,
    ) -> Result<BendEvent> {
        self.write_input(name, value)?;
        self.recalculate(config)
    }

    /// Writes an input value without recomputing.
    ///
    /// Used when several inputs change together; the caller follows up with
    /// [`Bend::recalculate`].
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown input name or kind mismatch.
    pub fn set_input_deferred(&mut self, name: ParamName, value: ParamValue) -> Result<()> {
        self.write_input(name, value)
    }

    /// Runs the bound calculator against the current inputs.
    ///
    /// Domain infeasibility does not fail this call; it lands in
    /// [`Bend::alert`] with degraded output values.
    ///
    /// # Errors
    ///
    /// Returns an error only for calculator defects (missing slots, bad
    /// frames).
    pub fn recalculate(&mut self, config: &BendConfig) -> Result<BendEvent> {
        let calc = self.kind.calculate(&self.inputs, config)?;
        for (name, value) in calc.outputs {
            self.set_output(name, value)?;
        }
        self.conduit_order = calc.order;
        self.alert = calc.alert;
        self.calculated = true;
        Ok(BendEvent::Recalculated)
    }

    /// Writes an output value. Never triggers recomputation or events.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown output name or kind mismatch.
    pub(crate) fn set_output(&mut self, name: ParamName, value: ParamValue) -> Result<()> {
        let slot = self
            .outputs
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or(ModelError::UnknownParameter {
                role: "output",
                name,
            })?;
        if !value.matches(slot.kind) {
            return Err(ModelError::KindMismatch { name }.into());
        }
        slot.value = value;
        Ok(())
    }

    /// Selects (or clears) the parameter highlighted on the 3D model.
    ///
    /// Returns [`BendEvent::HighlightChanged`] only when the selection
    /// actually changed; never triggers recomputation.
    pub fn set_highlight(&mut self, target: Option<ParamRef>) -> Option<BendEvent> {
        if self.highlighted == target {
            return None;
        }
        self.highlighted = target;
        Some(BendEvent::HighlightChanged)
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn inputs(&self) -> &[BendParameter] {
        &self.inputs
    }

    #[must_use]
    pub fn outputs(&self) -> &[BendParameter] {
        &self.outputs
    }

    /// Looks up an output slot by name.
    #[must_use]
    pub fn output(&self, name: ParamName) -> Option<&BendParameter> {
        self.outputs.iter().find(|p| p.name == name)
    }

    /// Looks up an input slot by name.
    #[must_use]
    pub fn input(&self, name: ParamName) -> Option<&BendParameter> {
        self.inputs.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn conduit_order(&self) -> &[PathMarker] {
        &self.conduit_order
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<ParamRef> {
        self.highlighted
    }

    fn write_input(&mut self, name: ParamName, value: ParamValue) -> Result<()> {
        let slot = self
            .inputs
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or(ModelError::UnknownParameter {
                role: "input",
                name,
            })?;
        if !value.matches(slot.kind) {
            return Err(ModelError::KindMismatch { name }.into());
        }
        slot.value = value;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::UnitSystem;
    use crate::error::BendlineError;

    fn offset_bend() -> Bend {
        BendKind::Offset.instantiate("Offset", UnitSystem::Metric).unwrap()
    }

    #[test]
    fn lifecycle_reaches_calculated() {
        let config = BendConfig::default();
        let mut bend = offset_bend();
        assert_eq!(bend.state(), BendState::Configured);

        let event = bend
            .set_input(ParamName::Angle, ParamValue::Angle(30.0), &config)
            .unwrap();
        assert_eq!(event, BendEvent::Recalculated);
        assert_eq!(bend.state(), BendState::Calculated);
        assert!(bend.conduit_order().len() >= 2);
    }

    #[test]
    fn deferred_write_does_not_recompute() {
        let mut bend = offset_bend();
        bend.set_input_deferred(ParamName::OffsetHeight, ParamValue::Float(0.3))
            .unwrap();
        assert_eq!(bend.state(), BendState::Configured);
        assert!(bend.conduit_order().is_empty());
    }

    #[test]
    fn reembedding_inputs_fails() {
        let mut bend = offset_bend();
        let result = bend.embed_inputs(vec![]);
        assert!(matches!(
            result,
            Err(BendlineError::Model(ModelError::Reinitialization("inputs")))
        ));
    }

    #[test]
    fn unknown_input_fails() {
        let config = BendConfig::default();
        let mut bend = offset_bend();
        let result = bend.set_input(ParamName::StubLength, ParamValue::Float(0.5), &config);
        assert!(matches!(
            result,
            Err(BendlineError::Model(ModelError::UnknownParameter { .. }))
        ));
    }

    #[test]
    fn kind_mismatch_fails() {
        let config = BendConfig::default();
        let mut bend = offset_bend();
        let result = bend.set_input(ParamName::Angle, ParamValue::Float(30.0), &config);
        assert!(matches!(
            result,
            Err(BendlineError::Model(ModelError::KindMismatch { .. }))
        ));
    }

    #[test]
    fn highlight_events_fire_only_on_change() {
        let mut bend = offset_bend();
        let event = bend.set_highlight(Some(ParamRef::Input(0)));
        assert_eq!(event, Some(BendEvent::HighlightChanged));
        let event = bend.set_highlight(Some(ParamRef::Input(0)));
        assert_eq!(event, None);
        let event = bend.set_highlight(None);
        assert_eq!(event, Some(BendEvent::HighlightChanged));
    }
}
