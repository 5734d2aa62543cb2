use crate::calc::BendKind;
use crate::config::UnitSystem;
use crate::error::{RegistryError, Result};
use crate::model::Bend;

/// Maps bend type names to their calculators and parameter schemas.
///
/// Each registered entry is the single source of truth for its type's slot
/// order, kinds, and defaults; [`BendTypeRegistry::instantiate`] produces a
/// fresh, configured [`Bend`] per request.
#[derive(Debug, Clone)]
pub struct BendTypeRegistry {
    entries: Vec<(String, BendKind)>,
}

impl BendTypeRegistry {
    /// An empty registry with no types.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a type, overriding any existing entry with the same name.
    pub fn register(&mut self, name: impl Into<String>, kind: BendKind) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = kind;
        } else {
            self.entries.push((name, kind));
        }
    }

    /// The registered type names, in registration order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Creates a fresh, configured bend of the named type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownBendType`] when no type is
    /// registered under `name`.
    pub fn instantiate(&self, name: &str, units: UnitSystem) -> Result<Bend> {
        let kind = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, k)| *k)
            .ok_or_else(|| RegistryError::UnknownBendType(name.into()))?;
        kind.instantiate(name, units)
    }
}

impl Default for BendTypeRegistry {
    /// The nine standard bend types under their display names.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("Offset", BendKind::Offset);
        registry.register("Parallel Offset", BendKind::ParallelOffset);
        registry.register("Rolled Offset", BendKind::RolledOffset);
        registry.register("3-Point Saddle", BendKind::ThreePointSaddle);
        registry.register("4-Point Saddle", BendKind::FourPointSaddle);
        registry.register("Parallel Kick", BendKind::ParallelKick);
        registry.register("Stub-Up", BendKind::StubUp);
        registry.register("Segmented (Simple)", BendKind::SegmentedSimple);
        registry.register("Segmented (Accurate)", BendKind::SegmentedAccurate);
        registry
    }
}
