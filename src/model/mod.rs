pub mod bend;
pub mod metadata;
pub mod param;
pub mod path;

pub use bend::{Bend, BendEvent, BendState, ParamRef};
pub use metadata::{clamp_to_range, range_for, ParamRange};
pub use param::{BendParameter, ParamKind, ParamName, ParamValue};
pub use path::{MarkFlag, OrderBuilder, PathMarker};
