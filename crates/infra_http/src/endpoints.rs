//! Backend service endpoints
//!
//! The backend is split across a few hosts: auth and billing share one,
//! the resource registry sits on another, and the claims service is its
//! own deployment. Defaults point at the hosted environments; every URL
//! can be overridden from configuration.

use serde::Deserialize;
use url::Url;

use core_kernel::CoreError;

/// Base URLs for the backend services
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEndpoints {
    /// Auth endpoints (`/auth/login`, `/firebase/verify-token`, ...)
    pub auth_base: String,
    /// Resource registry (doctors, staff, departments, payers, ...)
    pub resources_base: String,
    /// Billing endpoints (tariffs, TDS mappings)
    pub billing_base: String,
    /// Claims service (submission, inbox, drafts)
    pub claims_base: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            auth_base: "https://provider-4.onrender.com/api".to_string(),
            resources_base: "https://provider-3.onrender.com/api".to_string(),
            billing_base: "https://provider-4.onrender.com/api".to_string(),
            claims_base: "http://localhost:5002/api/v1".to_string(),
        }
    }
}

impl ServiceEndpoints {
    /// Points every service at one host; used by tests and local stacks
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            auth_base: base.clone(),
            resources_base: base.clone(),
            billing_base: base.clone(),
            claims_base: base,
        }
    }

    /// Checks that every base parses as an absolute URL
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("auth_base", &self.auth_base),
            ("resources_base", &self.resources_base),
            ("billing_base", &self.billing_base),
            ("claims_base", &self.claims_base),
        ] {
            Url::parse(value)
                .map_err(|e| CoreError::configuration(format!("{name} is not a valid URL: {e}")))?;
        }
        Ok(())
    }
}
