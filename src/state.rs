use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::services::ContactService;
use crate::utils::extract_domain::DomainSource;

/// Shared state injected into every handler.
///
/// Built once per cold start; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
    pub domain_source: DomainSource,
    pub success_status: StatusCode,
}

impl AppState {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self {
            contact_service,
            domain_source: DomainSource::default(),
            success_status: StatusCode::OK,
        }
    }

    pub fn with_domain_source(mut self, domain_source: DomainSource) -> Self {
        self.domain_source = domain_source;
        self
    }

    pub fn with_success_status(mut self, success_status: StatusCode) -> Self {
        self.success_status = success_status;
        self
    }
}
