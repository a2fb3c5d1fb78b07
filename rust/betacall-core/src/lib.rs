pub mod compare;
pub mod error;
pub mod geometry;
pub mod manifest;
pub mod models;
pub mod options;
pub mod pipeline;
pub mod process;
pub mod start;
pub mod text;

pub use compare::Comparator;
pub use error::RouteError;
pub use geometry::Geometry;
pub use manifest::{build_audio_manifest, AudioCue, AudioManifest};
pub use models::{Coordinate, Direction, Distance, HeightLevel, Matrix, Member, MemberMoveInfo, Position, ProcessedPosition};
pub use options::RouteConfig;
pub use pipeline::{compute_route, validate_positions, ProcessRouteRequest, ProcessRouteResult};
pub use process::process_positions;
pub use start::synthesize_start;
pub use text::{generate_member_text, generate_texts, height_level_to_body_part};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
