/// Constant value for `HYBRID_SEARCH_BM25_K1`.
pub const HYBRID_SEARCH_BM25_K1: f64 = 1.2;
/// Constant value for `HYBRID_SEARCH_BM25_B`.
pub const HYBRID_SEARCH_BM25_B: f64 = 0.75;
/// Constant value for `BM25_TOKEN_MIN_LENGTH`.
pub const BM25_TOKEN_MIN_LENGTH: usize = 2;
/// Constant value for `HYBRID_SEARCH_BM25_WEIGHT`.
pub const HYBRID_SEARCH_BM25_WEIGHT: f64 = 0.4;
/// Constant value for `HYBRID_SEARCH_SEMANTIC_WEIGHT`.
pub const HYBRID_SEARCH_SEMANTIC_WEIGHT: f64 = 0.6;
/// Constant value for `HYBRID_SEARCH_MAX_CANDIDATES`.
pub const HYBRID_SEARCH_MAX_CANDIDATES: usize = 100;
