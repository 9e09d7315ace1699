//! `git2`-backed VCS provider.
//!
//! [`Git2Provider`] implements [`mcb_domain::ports::providers::VcsProvider`]
//! against a local on-disk repository via `libgit2`. [`Git2GitAnalyzer`]
//! implements [`mcb_domain::ports::providers::GitAnalyzer`] over the same
//! checkout, answering the Cluster Analyzer's trailing-window churn
//! queries. [`submodule`] walks a repository's `.gitmodules` tree for the
//! Cluster Analyzer's git-history step and the hybrid-search collection
//! layout.

mod analyzer;
mod provider;
pub mod submodule;

pub use analyzer::Git2GitAnalyzer;
pub use provider::Git2Provider;
