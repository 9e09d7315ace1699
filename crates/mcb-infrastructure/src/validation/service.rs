//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Validation Service Implementation
//!
//! # Overview
//! The `InfraValidationService` satisfies the domain's `ValidationServiceInterface`
//! port for the legacy MCP tool surface. Architecture/code-quality validation (the
//! `mcb-validate` toolkit) is out of scope for the Analysis Execution Core, so this
//! adapter reports zero violations rather than running a real validator.

use std::path::Path;

use async_trait::async_trait;
use mcb_domain::error::Result;
use mcb_domain::ports::{
    ComplexityReport, FunctionComplexity, RuleInfo, ValidationReport, ValidationServiceInterface,
};

/// No-op validation service. Always reports a clean, empty report.
pub struct InfraValidationService;

impl InfraValidationService {
    /// Create a new validation service
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for InfraValidationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValidationServiceInterface for InfraValidationService {
    async fn validate(
        &self,
        _workspace_root: &Path,
        _validators: Option<&[String]>,
        _severity_filter: Option<&str>,
    ) -> Result<ValidationReport> {
        Ok(empty_report())
    }

    async fn list_validators(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn validate_file(
        &self,
        _file_path: &Path,
        _validators: Option<&[String]>,
    ) -> Result<ValidationReport> {
        Ok(empty_report())
    }

    async fn get_rules(&self, _category: Option<&str>) -> Result<Vec<RuleInfo>> {
        Ok(Vec::new())
    }

    async fn analyze_complexity(
        &self,
        file_path: &Path,
        _include_functions: bool,
    ) -> Result<ComplexityReport> {
        Ok(ComplexityReport {
            file: file_path.to_str().unwrap_or_default().to_owned(),
            cyclomatic: 0.0,
            cognitive: 0.0,
            maintainability_index: 100.0,
            sloc: 0,
            functions: Vec::<FunctionComplexity>::new(),
        })
    }
}

fn empty_report() -> ValidationReport {
    ValidationReport {
        total_violations: 0,
        errors: 0,
        warnings: 0,
        infos: 0,
        violations: Vec::new(),
        passed: true,
    }
}

// ---------------------------------------------------------------------------
// Linkme Registration
// ---------------------------------------------------------------------------
use mcb_domain::registry::services::{
    SERVICES_REGISTRY, ServiceBuilder, ServiceRegistryEntry, VALIDATION_SERVICE_NAME,
};

#[linkme::distributed_slice(SERVICES_REGISTRY)]
static VALIDATION_SERVICE_REGISTRY_ENTRY: ServiceRegistryEntry = ServiceRegistryEntry {
    name: VALIDATION_SERVICE_NAME,
    build: ServiceBuilder::Validation(|_context| {
        Ok(std::sync::Arc::new(InfraValidationService::new()))
    }),
};
