//! Claims service adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use core_kernel::{DomainPort, PortError};
use domain_claims::{
    ChecklistItem, Claim, ClaimListItem, ClaimStatistics, ClaimStatus, ClaimSubmission,
    ClaimsListParams, ClaimsPort, Draft, SaveDraftResponse, SubmitClaimResponse,
};

use crate::adapters::Ack;
use crate::client::HttpGateway;

/// `ClaimsPort` against the claims service
pub struct ClaimsGateway {
    gateway: Arc<HttpGateway>,
}

impl ClaimsGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().claims_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct ClaimsListEnvelope {
    claims: Vec<ClaimListItem>,
}

#[derive(Debug, Deserialize)]
struct ClaimEnvelope {
    claim: Claim,
}

#[derive(Debug, Deserialize)]
struct ChecklistEnvelope {
    checklist: Vec<ChecklistItem>,
}

impl DomainPort for ClaimsGateway {}

#[async_trait]
impl ClaimsPort for ClaimsGateway {
    async fn submit_claim(
        &self,
        submission: &ClaimSubmission,
    ) -> Result<SubmitClaimResponse, PortError> {
        self.gateway.post(&self.url("claims/"), submission).await
    }

    async fn list_claims(
        &self,
        params: &ClaimsListParams,
    ) -> Result<Vec<ClaimListItem>, PortError> {
        let envelope: ClaimsListEnvelope = self
            .gateway
            .get_with_query(&self.url("claims/"), params)
            .await?;
        Ok(envelope.claims)
    }

    async fn claim_details(&self, claim_id: &str) -> Result<Claim, PortError> {
        let envelope: ClaimEnvelope = self
            .gateway
            .get(&self.url(&format!("claims/{claim_id}")))
            .await?;
        Ok(envelope.claim)
    }

    async fn update_status(&self, claim_id: &str, status: ClaimStatus) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .put(
                &self.url(&format!("claims/{claim_id}/status")),
                &json!({ "claim_status": status }),
            )
            .await?;
        Ok(())
    }

    async fn delete_claim(&self, claim_id: &str) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("claims/{claim_id}")))
            .await?;
        Ok(())
    }

    async fn statistics(&self, hospital_id: Option<&str>) -> Result<ClaimStatistics, PortError> {
        match hospital_id {
            Some(id) => {
                self.gateway
                    .get_with_query(&self.url("claims/statistics"), &[("hospital_id", id)])
                    .await
            }
            None => self.gateway.get(&self.url("claims/statistics")).await,
        }
    }

    async fn save_draft(
        &self,
        submission: &ClaimSubmission,
    ) -> Result<SaveDraftResponse, PortError> {
        self.gateway
            .post(&self.url("drafts/save-draft"), submission)
            .await
    }

    async fn load_draft(&self, draft_id: &str) -> Result<Draft, PortError> {
        self.gateway
            .get(&self.url(&format!("drafts/{draft_id}")))
            .await
    }

    async fn document_checklist(
        &self,
        payer_name: &str,
        specialty: &str,
    ) -> Result<Vec<ChecklistItem>, PortError> {
        let envelope: ChecklistEnvelope = self
            .gateway
            .get_with_query(
                &self.url("checklist"),
                &[("payer_name", payer_name), ("specialty", specialty)],
            )
            .await?;
        Ok(envelope.checklist)
    }
}
