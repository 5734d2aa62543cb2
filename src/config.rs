use crate::error::{ConfigError, Result};

/// Which parameter-range table the UI consults when validating entries.
///
/// All internal math is unit-agnostic and expects SI-consistent inputs; the
/// unit system only selects which bounds apply to user-entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Standard,
}

/// Immutable global configuration for one recompute.
///
/// Passed explicitly into every calculator, sampler, and mesh-builder call so
/// that recomputation stays a pure function of (bend state, configuration).
#[derive(Debug, Clone, Copy)]
pub struct BendConfig {
    /// Centerline radius of the physical bender, in meters.
    pub bender_radius: f64,
    /// Outer diameter of the conduit, in meters.
    pub conduit_diameter: f64,
    /// Number of sides of the tube cross-section polygon.
    pub sides: usize,
    /// Arc sampling granularity for the centerline, in degrees.
    pub degrees_per_step: f64,
    /// Active unit system for parameter-range lookups.
    pub units: UnitSystem,
}

impl Default for BendConfig {
    fn default() -> Self {
        Self {
            bender_radius: 0.4064,
            conduit_diameter: 0.0178,
            sides: 12,
            degrees_per_step: 2.0,
            units: UnitSystem::Metric,
        }
    }
}

impl BendConfig {
    /// Outer radius of the conduit.
    #[must_use]
    pub fn conduit_radius(&self) -> f64 {
        self.conduit_diameter / 2.0
    }

    /// Checks the configuration for values no recompute can work with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the side count is below 3 or any length
    /// or step is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(ConfigError::TooFewSides(self.sides).into());
        }
        for (name, value) in [
            ("bender_radius", self.bender_radius),
            ("conduit_diameter", self.conduit_diameter),
            ("degrees_per_step", self.degrees_per_step),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value }.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(BendConfig::default().validate().is_ok());
    }

    #[test]
    fn too_few_sides_rejected() {
        let config = BendConfig {
            sides: 2,
            ..BendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_step_rejected() {
        let config = BendConfig {
            degrees_per_step: 0.0,
            ..BendConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
