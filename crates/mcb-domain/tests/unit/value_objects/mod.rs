mod embedding_tests;
mod ids_tests;
mod org_context_tests;
mod vcs_context_tests;
