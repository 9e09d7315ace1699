//! Server transport and protocol layer for the Analysis Execution Core.
//!
//! Three modules: [`state`] (the composition root), [`error_mapping`]
//! (domain error → HTTP response), and [`routes`] (the Axum router). The
//! `mcb` binary crate owns process startup (config load, logging init,
//! listener bind); this crate only assembles the router.

pub mod error_mapping;
pub mod routes;
pub mod state;

pub use error_mapping::ApiError;
pub use routes::build_router;
pub use state::AnalysisServerState;
