//!
//! **Documentation**: [docs/modules/application.md](../../../docs/modules/application.md)
//!
//! Application layer constants
//!
//! Constants used by use cases and domain services.

// ============================================================================
// MEMORY / SEARCH
// ============================================================================

/// Max length for observation content preview in search results
pub const OBSERVATION_PREVIEW_LENGTH: usize = 120;

/// Name of the vector collection for storing observations
pub const MEMORY_COLLECTION_NAME: &str = "memories";

// ============================================================================
// INDEXING
// ============================================================================

/// Directories to skip during codebase indexing
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target", "__pycache__"];

/// Publish progress event every N files
pub const PROGRESS_UPDATE_INTERVAL: usize = 10;

// ============================================================================
// ANALYSIS EXECUTION CORE
// ============================================================================

/// How long an analysis's heartbeat can go stale before the stuck-analysis
/// detector force-fails every non-terminal track (seconds).
pub const STUCK_THRESHOLD_SECS: i64 = 600;

/// A file-churn finding is a "hot spot" once it changed more than this many
/// times in the trailing 90 days.
pub const HOT_SPOT_CHANGE_THRESHOLD: u32 = 10;

/// Window the `GitAnalyzer` churn query looks back over, in days.
pub const CHURN_WINDOW_DAYS: u32 = 90;

/// Confidence assigned to a dead-code finding proven unreachable by the
/// call-graph analyzer.
pub const DEAD_CODE_CONFIDENCE_PROVEN: f64 = 1.0;

/// Confidence assigned to a dead-code finding inferred only from a
/// naming-convention heuristic (no call-graph proof).
pub const DEAD_CODE_CONFIDENCE_HEURISTIC: f64 = 0.4;

/// Directory name fragments the dead-code detector treats as utility/shared
/// code, where an unreachable-looking item is more likely a public library
/// export than genuinely dead.
pub const UTILITY_DIR_PATTERNS: &[&str] = &["util", "utils", "lib", "common", "shared"];

/// Function/path name fragments the call-graph reachability walk treats as
/// entry points (never flagged dead regardless of in-degree).
pub const ENTRY_POINT_PATTERNS: &[&str] = &["main", "handler", "handle_", "route_"];

/// Files larger than this are skipped by the Embeddings Worker's tree walk
/// rather than chunked (binary dumps, generated assets, lockfiles).
pub const MAX_EMBEDDABLE_FILE_BYTES: u64 = 1_000_000;

/// Default vector-index collection name, used when
/// `providers.vector_store.collection` isn't set. Every repository's chunks
/// live in this one collection, distinguished by the `repository_id` payload
/// field rather than by a per-repository collection.
pub const DEFAULT_EMBEDDINGS_COLLECTION: &str = "code_embeddings";

/// Number of chunks embedded per batch request.
pub const EMBEDDING_BATCH_SIZE: usize = 32;

/// Maximum retry attempts for a failed embedding batch before the
/// embeddings track is marked `failed`.
pub const EMBEDDING_MAX_RETRIES: u32 = 3;

/// Base delay for the embeddings batch retry's exponential backoff
/// (milliseconds); attempt `n` waits `base * 2^n`.
pub const EMBEDDING_RETRY_BASE_MS: u64 = 200;

/// Maximum characters of a single file's content included verbatim in the
/// AI Scan broad-scan repository digest.
pub const MAX_FILE_SIZE: usize = 20_000;

/// Maximum characters of a single file excerpt quoted inside a broad-scan
/// prompt when the full file exceeds [`MAX_FILE_SIZE`].
pub const EXCERPT_SIZE: usize = 2_000;

/// Two merged-issue titles at or above this Ratcliff/Obershelp similarity
/// ratio are treated as the same underlying issue.
pub const SIMILARITY_THRESHOLD: f64 = 0.82;

/// Hard cap on tool-calling turns in the AI Scan investigator loop, per
/// issue, before the verdict defaults to inconclusive.
pub const MAX_INVESTIGATION_ITERATIONS: u32 = 8;

/// Wallclock budget for a single `cli_run` tool invocation inside the
/// investigator's sandbox.
pub const SANDBOX_COMMAND_TIMEOUT_SECS: u64 = 30;

/// Timeout applied to each model's broad-scan completion call.
pub const BROAD_SCAN_MODEL_TIMEOUT_SECS: u64 = 60;

/// How long a `Failed` repo content cache is kept before the GC worker
/// deletes it (seconds).
pub const CACHE_FAILED_TTL_SECS: i64 = 86_400;

/// How long a cache stuck in `Fetching` (orphaned, worker crashed) is kept
/// before the GC worker deletes it (seconds).
pub const CACHE_STUCK_TTL_SECS: i64 = 3_600;

/// How long an unpinned, `Ready` cache is kept since its last access before
/// the GC worker evicts it as cold (seconds).
pub const CACHE_AGE_TTL_SECS: i64 = 30 * 86_400;

/// Confidence boost applied per additional model agreeing on a merged AI
/// Scan issue, on top of the highest single-model confidence. Capped so the
/// final value never exceeds 1.0 regardless of how many models agree.
pub const CONSENSUS_BOOST_PER_MODEL: f64 = 0.08;

/// Minimum cosine similarity between two chunks' content term-frequency
/// vectors for them to count as neighbors in the Cluster Analyzer's
/// density-based clustering pass.
pub const CLUSTER_NEIGHBOR_SIMILARITY: f64 = 0.35;

/// Minimum neighbor count (including self) for a chunk to seed a cluster as
/// a density core point. Chunks that never reach this density, directly or
/// by expansion from a core point, are left as outliers (`cluster_id = -1`).
pub const CLUSTER_MIN_POINTS: usize = 3;

/// Config/manifest file names the AI Scan broad-scan digest always includes
/// verbatim (bounded by `MAX_FILE_SIZE`/`EXCERPT_SIZE` like any other file).
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "Cargo.toml", "package.json", "pyproject.toml", "go.mod", "pom.xml", "build.gradle",
];

/// Line-count value at which the dead-code impact score's size component
/// saturates at 1.0.
pub const IMPACT_LINE_COUNT_SCALE: f64 = 200.0;

/// Weight of line count in the dead-code impact score; the remainder
/// (`1.0 - IMPACT_LINE_COUNT_WEIGHT`) goes to the file-centrality component.
pub const IMPACT_LINE_COUNT_WEIGHT: f64 = 0.6;

/// `changes_90d` value at which the hot-spot risk score's churn component
/// saturates at 1.0.
pub const RISK_CHURN_SCALE: f64 = 50.0;

/// `unique_authors` value at which the hot-spot risk score's author-spread
/// component saturates at 1.0.
pub const RISK_AUTHORS_SCALE: f64 = 10.0;

/// Weight of churn in the hot-spot risk score.
pub const RISK_CHURN_WEIGHT: f64 = 0.5;

/// Weight of inverse coverage in the hot-spot risk score.
pub const RISK_COVERAGE_WEIGHT: f64 = 0.3;

/// Weight of unique-author count in the hot-spot risk score
/// (`RISK_CHURN_WEIGHT + RISK_COVERAGE_WEIGHT + RISK_AUTHORS_WEIGHT == 1.0`).
pub const RISK_AUTHORS_WEIGHT: f64 = 0.2;

/// Coverage rate assumed for a file with no coverage data at all, so an
/// untested-but-unmeasured file doesn't silently score as "fully covered".
pub const RISK_UNKNOWN_COVERAGE_ASSUMPTION: f64 = 0.5;

/// Maximum number of vector-index points the Cluster Analyzer pulls per
/// analysis run before clustering. Bounds the O(n^2) neighbor pass.
pub const CLUSTER_VECTOR_FETCH_LIMIT: usize = 10_000;

/// Per-chunk cyclomatic-complexity heuristic at or above which the Static
/// Analysis Worker raises a `high-cyclomatic-complexity` issue.
pub const STATIC_COMPLEXITY_WARNING_THRESHOLD: u32 = 10;

/// Per-chunk cyclomatic-complexity heuristic at or above which the raised
/// issue's severity is `Error` rather than `Warning`.
pub const STATIC_COMPLEXITY_ERROR_THRESHOLD: u32 = 20;

/// Chunk line count at or above which the Static Analysis Worker raises a
/// `long-function` issue.
pub const STATIC_LONG_FUNCTION_LINES: u32 = 150;

/// Points subtracted from a perfect 100 `vci_score` per complexity point
/// summed across every chunk in the repository, normalized by chunk count.
pub const VCI_COMPLEXITY_PENALTY_WEIGHT: f64 = 2.5;

/// Points subtracted from `vci_score` per issue raised, per thousand lines
/// of source scanned (issue density).
pub const VCI_ISSUE_DENSITY_PENALTY_WEIGHT: f64 = 40.0;

/// `vci_score` at or above which `tech_debt_level` is `Low`.
pub const TECH_DEBT_LOW_THRESHOLD: f64 = 80.0;

/// `vci_score` at or above which `tech_debt_level` is `Moderate` (below
/// this, `High`; below [`TECH_DEBT_CRITICAL_THRESHOLD`], `Critical`).
pub const TECH_DEBT_MODERATE_THRESHOLD: f64 = 60.0;

/// `vci_score` below which `tech_debt_level` is `Critical`.
pub const TECH_DEBT_CRITICAL_THRESHOLD: f64 = 40.0;
