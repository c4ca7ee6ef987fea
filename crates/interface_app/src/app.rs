//! Composition root
//!
//! Builds the whole stack from configuration: session store, expiry
//! policy, HTTP gateway, adapters, and the services the shell holds on
//! to. The shell constructs this once at startup and hands services to
//! its screens.

use std::sync::Arc;
use std::time::Duration;

use auth_session::{
    FixedTtl, InMemorySessionStore, JsonFileSessionStore, SessionContext, SessionStore,
};
use domain_registry::ports::{DepartmentsPort, SpecialtiesPort, WardsPort};
use infra_http::{
    AuthGateway, ClaimsGateway, DepartmentsGateway, DoctorsGateway, HttpGateway, PayersGateway,
    SpecialtiesGateway, StaffGateway, TariffsGateway, TdsGateway, TtlCache, WardsGateway,
};

use crate::auth_flow::AuthFlow;
use crate::billing_service::{TariffService, TdsService};
use crate::claim_service::ClaimFormService;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::payer_service::PayerAffiliationService;
use crate::registry_service::{DoctorsService, StaffService};

/// Everything the UI shell needs, wired together
pub struct AppServices {
    pub session: SessionContext,
    pub auth: AuthFlow,
    pub claims: ClaimFormService,
    pub doctors: DoctorsService,
    pub staff: StaffService,
    pub payers: PayerAffiliationService,
    pub tariffs: TariffService,
    pub tds: TdsService,
    /// Dropdown lookups the form screens read directly
    pub departments: Arc<dyn DepartmentsPort>,
    pub specialties: Arc<dyn SpecialtiesPort>,
    pub wards: Arc<dyn WardsPort>,
}

impl AppServices {
    /// Wires the full stack from configuration
    pub fn build(config: &AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(JsonFileSessionStore::new(path.clone())),
            None => Arc::new(InMemorySessionStore::new()),
        };
        let session = SessionContext::new(store, Arc::new(FixedTtl::twenty_four_hours()));

        let gateway = Arc::new(HttpGateway::with_timeout(
            config.endpoints.clone(),
            session.clone(),
            Duration::from_secs(config.timeout_secs),
        )?);
        let cache = Arc::new(TtlCache::with_default_ttl());

        Ok(Self {
            session: session.clone(),
            auth: AuthFlow::new(Arc::new(AuthGateway::new(gateway.clone())), session),
            claims: ClaimFormService::new(Arc::new(ClaimsGateway::new(gateway.clone()))),
            doctors: DoctorsService::new(Arc::new(DoctorsGateway::new(gateway.clone()))),
            staff: StaffService::new(Arc::new(StaffGateway::new(gateway.clone()))),
            payers: PayerAffiliationService::new(Arc::new(PayersGateway::new(gateway.clone()))),
            tariffs: TariffService::new(Arc::new(TariffsGateway::new(gateway.clone(), cache))),
            tds: TdsService::new(Arc::new(TdsGateway::new(gateway.clone()))),
            departments: Arc::new(DepartmentsGateway::new(gateway.clone())),
            specialties: Arc::new(SpecialtiesGateway::new(gateway.clone())),
            wards: Arc::new(WardsGateway::new(gateway)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let services = AppServices::build(&AppConfig::default()).unwrap();
        assert!(services.session.get().unwrap().is_none());
    }
}
