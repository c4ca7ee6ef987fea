//! Payer affiliation endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use core_kernel::{AffiliationId, BulkOutcome, DomainPort, PayerId, PortError};
use domain_registry::ports::PayersPort;
use domain_registry::{
    AvailablePayers, CreatePayerAffiliationRequest, Paginated, Pagination, Payer,
    PayerAffiliation, PayerAffiliationFilters, PayerType, UpdatePayerAffiliationRequest,
};

use crate::adapters::{Ack, BulkResultEnvelope};
use crate::client::HttpGateway;

/// `PayersPort` against the resource registry service
pub struct PayersGateway {
    gateway: Arc<HttpGateway>,
}

impl PayersGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().resources_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct AffiliationsEnvelope {
    affiliations: Vec<PayerAffiliation>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct AffiliationEnvelope {
    affiliation: PayerAffiliation,
}

#[derive(Debug, Deserialize)]
struct PayersEnvelope {
    payers: Vec<Payer>,
}

#[derive(Debug, Deserialize)]
struct PayerEnvelope {
    payer: Payer,
}

impl DomainPort for PayersGateway {}

#[async_trait]
impl PayersPort for PayersGateway {
    async fn list_affiliations(
        &self,
        filters: &PayerAffiliationFilters,
    ) -> Result<Paginated<PayerAffiliation>, PortError> {
        let envelope: AffiliationsEnvelope = self
            .gateway
            .get_with_query(&self.url("payer-affiliations"), filters)
            .await?;
        Ok(Paginated {
            items: envelope.affiliations,
            pagination: envelope.pagination,
        })
    }

    async fn get_affiliation(&self, id: AffiliationId) -> Result<PayerAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .get(&self.url(&format!("payer-affiliations/{}", id.as_uuid())))
            .await?;
        Ok(envelope.affiliation)
    }

    async fn create_affiliation(
        &self,
        request: &CreatePayerAffiliationRequest,
    ) -> Result<PayerAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .post(&self.url("payer-affiliations"), request)
            .await?;
        Ok(envelope.affiliation)
    }

    async fn update_affiliation(
        &self,
        id: AffiliationId,
        request: &UpdatePayerAffiliationRequest,
    ) -> Result<PayerAffiliation, PortError> {
        let envelope: AffiliationEnvelope = self
            .gateway
            .put(
                &self.url(&format!("payer-affiliations/{}", id.as_uuid())),
                request,
            )
            .await?;
        Ok(envelope.affiliation)
    }

    async fn delete_affiliation(&self, id: AffiliationId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("payer-affiliations/{}", id.as_uuid())))
            .await?;
        Ok(())
    }

    async fn bulk_affiliate(&self, payer_names: &[String]) -> Result<BulkOutcome<String>, PortError> {
        let envelope: BulkResultEnvelope = self
            .gateway
            .post(
                &self.url("payer-affiliations/bulk"),
                &json!({ "payer_names": payer_names }),
            )
            .await?;
        Ok(envelope.into_outcome())
    }

    async fn available_payers(&self) -> Result<AvailablePayers, PortError> {
        self.gateway.get(&self.url("available-payers")).await
    }

    async fn payers_by_type(&self, payer_type: PayerType) -> Result<Vec<Payer>, PortError> {
        let envelope: PayersEnvelope = self
            .gateway
            .get_with_query(&self.url("payers"), &[("payer_type", payer_type)])
            .await?;
        Ok(envelope.payers)
    }

    async fn payer_details(&self, id: PayerId) -> Result<Payer, PortError> {
        let envelope: PayerEnvelope = self
            .gateway
            .get(&self.url(&format!("payers/{}", id.as_uuid())))
            .await?;
        Ok(envelope.payer)
    }
}
