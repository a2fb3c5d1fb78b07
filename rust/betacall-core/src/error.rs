use crate::models::{Coordinate, Member};

/// Failure kinds of route processing. Any of them aborts the whole request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("unreachable move for {member}: {from} -> {to}")]
    UnreachableMove { member: Member, from: Coordinate, to: Coordinate },
    #[error("height {centimeters}cm for {member} is not a known height level")]
    HeightLevelOutOfRange { member: Member, centimeters: i64 },
    #[error("text to speech failed: {0}")]
    TextToSpeechFailure(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
