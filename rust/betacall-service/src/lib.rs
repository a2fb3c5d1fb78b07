pub mod config;
pub mod errors;
pub mod routes;
pub mod tts;

pub use routes::{build_router, AppState};
