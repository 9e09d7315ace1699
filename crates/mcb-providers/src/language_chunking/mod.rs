//! Universal code-chunking adapter.
//!
//! [`UniversalChunker`] is the only concrete
//! [`LanguageChunkingProvider`][mcb_domain::ports::providers::LanguageChunkingProvider]
//! in this workspace: a regex-driven, indentation/brace-aware splitter that
//! recognizes top-level function/method/class definitions across a handful
//! of common languages without building a real AST, grounded in the same
//! regex-over-source-text approach [`crate::analysis::NativePmatAnalyzer`]
//! uses for complexity and dead-code scanning.

mod universal;

pub use universal::UniversalChunker;
