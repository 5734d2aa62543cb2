use thiserror::Error;

use crate::model::ParamName;

/// Top-level error type for the Bendline kernel.
///
/// These are programming errors: a defect in a calculator, the registry
/// configuration, or the caller's wiring. Domain infeasibility (bends too
/// close, stub shorter than its take-up, ...) is never reported here; it
/// surfaces as the alert string on the [`crate::model::Bend`].
#[derive(Debug, Error)]
pub enum BendlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to low-level geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the global bend configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cross-section side count {0} is below the minimum of 3")]
    TooFewSides(usize),

    #[error("{name} = {value} must be positive")]
    NonPositive { name: &'static str, value: f64 },
}

/// Errors related to the bend runtime model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0} are already embedded on this bend")]
    Reinitialization(&'static str),

    #[error("bend has no {role} parameter named {name}")]
    UnknownParameter { role: &'static str, name: ParamName },

    #[error("value for {name} does not match the parameter kind")]
    KindMismatch { name: ParamName },
}

/// Errors related to the bend type registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown bend type: {0}")]
    UnknownBendType(String),
}

/// Errors related to centerline sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("conduit order has {0} markers, at least 2 are required")]
    ConduitOrderTooShort(usize),

    #[error("degrees per step = {0} must be positive")]
    InvalidStep(f64),
}

/// Errors related to tube mesh construction.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("cross-section side count {0} is below the minimum of 3")]
    TooFewSides(usize),

    #[error("centerline has {0} markers, at least 2 are required")]
    CenterlineTooShort(usize),

    #[error("tube radius {0} must be positive")]
    InvalidRadius(f64),

    #[error("ring range {first}..={last} is outside the mesh's {rings} rings")]
    RangeOutOfBounds {
        first: usize,
        last: usize,
        rings: usize,
    },

    #[error("mesh with {vertices} vertices is not aligned to rings of {sides} sides")]
    NotRingAligned { vertices: usize, sides: usize },
}

/// Convenience type alias for results using [`BendlineError`].
pub type Result<T> = std::result::Result<T, BendlineError>;
