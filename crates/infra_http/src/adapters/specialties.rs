//! Specialty affiliation endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use core_kernel::{DomainPort, PortError};
use domain_registry::ports::SpecialtiesPort;
use domain_registry::{Specialty, SpecialtyAffiliation};

use crate::client::HttpGateway;

/// `SpecialtiesPort` against the resource registry service
pub struct SpecialtiesGateway {
    gateway: Arc<HttpGateway>,
}

impl SpecialtiesGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().resources_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct SpecialtiesEnvelope {
    specialties: Vec<Specialty>,
}

#[derive(Debug, Deserialize)]
struct AffiliationEnvelope {
    affiliation: SpecialtyAffiliation,
}

#[derive(Debug, Deserialize)]
struct SpecialtyNamesEnvelope {
    specialty_names: Vec<String>,
}

impl DomainPort for SpecialtiesGateway {}

#[async_trait]
impl SpecialtiesPort for SpecialtiesGateway {
    async fn available_specialties(&self) -> Result<Vec<Specialty>, PortError> {
        let envelope: SpecialtiesEnvelope = self
            .gateway
            .get(&self.url("specialty-affiliations/available-specialties"))
            .await?;
        Ok(envelope.specialties)
    }

    async fn specialty_affiliation(&self) -> Result<SpecialtyAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .get(&self.url("specialty-affiliations"))
            .await?;
        Ok(envelope.affiliation)
    }

    async fn save_specialty_affiliation(
        &self,
        affiliation: &SpecialtyAffiliation,
    ) -> Result<SpecialtyAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .post(&self.url("specialty-affiliations"), affiliation)
            .await?;
        Ok(envelope.affiliation)
    }

    async fn add_specialties(&self, names: &[String]) -> Result<SpecialtyAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .post(
                &self.url("specialty-affiliations/add-specialties"),
                &json!({ "specialty_names": names }),
            )
            .await?;
        Ok(envelope.affiliation)
    }

    async fn affiliated_specialty_names(&self) -> Result<Vec<String>, PortError> {
        let envelope: SpecialtyNamesEnvelope = self
            .gateway
            .get(&self.url("specialty-affiliations/affiliated-specialties"))
            .await?;
        Ok(envelope.specialty_names)
    }
}
