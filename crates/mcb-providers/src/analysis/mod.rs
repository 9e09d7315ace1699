//!
//! **Documentation**: [docs/modules/providers.md](../../../../docs/modules/providers.md)
//!
//! Native PMAT-style analyzers, plus the reachability and coverage
//! adapters the Cluster Analyzer's dead-code and hot-spot scoring query.

mod call_graph;
mod coverage;
mod native;

pub use call_graph::NativeCallGraphAnalyzer;
pub use coverage::LcovCoverageProvider;
pub use native::NativePmatAnalyzer;
