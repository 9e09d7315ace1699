//! Call-graph analyzer port: reachability-from-entry-point queries backing
//! the Cluster Analyzer's dead-code detection (§4.4). Building the graph
//! itself requires a language-aware AST capability that is explicitly an
//! external collaborator (see the specification's scope notes); this port
//! only carries the query the Cluster Analyzer needs answered.

use std::path::Path;

use crate::error::Result;

/// A single candidate node (function/method) to test for reachability.
#[derive(Debug, Clone)]
pub struct CallGraphNode {
    /// Repository-relative file path the symbol is defined in.
    pub file_path: String,
    /// Symbol name.
    pub name: String,
    /// 1-based line number of the definition.
    pub line: u32,
}

/// Builds (or reuses a cached) call graph for a workspace and answers
/// reachability queries against it.
pub trait CallGraphAnalyzer: Send + Sync {
    /// Whether `node` is reachable from any entry point matching
    /// `entry_patterns` (e.g. `"main"`, `"pub fn handle_*"`, test
    /// functions). Implementations that can prove reachability
    /// call-graph-exactly should be preferred over heuristic fallbacks;
    /// callers distinguish the two via the finding's `confidence`, not via
    /// this return type.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Generic`] if the graph cannot be
    /// built for this workspace (e.g. unsupported language).
    fn is_reachable(
        &self,
        workspace_root: &Path,
        node: &CallGraphNode,
        entry_patterns: &[String],
    ) -> Result<bool>;
}
