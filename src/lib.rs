pub mod calc;
pub mod config;
pub mod error;
pub mod formula;
pub mod math;
pub mod model;
pub mod registry;
pub mod tessellation;

pub use error::{BendlineError, Result};
