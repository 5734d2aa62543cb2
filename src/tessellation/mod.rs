mod build_tube;
mod sample_centerline;

pub use build_tube::{extract_range, BuildTube, TubeMesh};
pub use sample_centerline::{
    Centerline, CenterlineIndex, CenterlineMarker, IndexRole, SampleCenterline,
};
