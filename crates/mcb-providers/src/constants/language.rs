//!
//! **Documentation**: [docs/modules/providers.md](../../../../docs/modules/providers.md)
//!
/// Default max chunk size (lines)
pub const LANGUAGE_DEFAULT_MAX_CHUNK_SIZE: usize = 50;

/// Maximum chunks per file
pub const LANGUAGE_MAX_CHUNKS_PER_FILE: usize = 75;

/// Priority threshold for chunk filtering
pub const LANGUAGE_PRIORITY_THRESHOLD: usize = 50;
