//! Claims Domain Port
//!
//! Operations the claim screens need from the backend: submission, listing,
//! details, status updates, statistics, and drafts. The HTTP gateway
//! implements this trait; tests substitute an in-memory mock.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, PortError};

use crate::claim::{Claim, ClaimListItem, ClaimStatus};
use crate::checklist::ChecklistItem;
use crate::draft::{Draft, SaveDraftResponse};
use crate::form::ClaimSubmission;

/// Query parameters for claim list screens
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaimsListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Response to a claim submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitClaimResponse {
    pub claim_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Aggregate counts for the dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimStatistics {
    pub total_claims: u64,
    pub submitted: u64,
    pub under_review: u64,
    pub approved: u64,
    pub rejected: u64,
    pub settled: u64,
    #[serde(default)]
    pub total_claimed_amount: Decimal,
}

/// Backend operations behind the claim screens
#[async_trait]
pub trait ClaimsPort: DomainPort {
    /// Submits a validated claim
    async fn submit_claim(&self, submission: &ClaimSubmission)
        -> Result<SubmitClaimResponse, PortError>;

    /// Lists claims for the hospital
    async fn list_claims(&self, params: &ClaimsListParams)
        -> Result<Vec<ClaimListItem>, PortError>;

    /// Fetches full claim details
    async fn claim_details(&self, claim_id: &str) -> Result<Claim, PortError>;

    /// Updates a claim's status
    async fn update_status(&self, claim_id: &str, status: ClaimStatus)
        -> Result<(), PortError>;

    /// Deletes a claim
    async fn delete_claim(&self, claim_id: &str) -> Result<(), PortError>;

    /// Fetches aggregate claim statistics
    async fn statistics(&self, hospital_id: Option<&str>)
        -> Result<ClaimStatistics, PortError>;

    /// Persists the form as a draft for later resumption
    async fn save_draft(&self, submission: &ClaimSubmission)
        -> Result<SaveDraftResponse, PortError>;

    /// Loads a previously saved draft
    async fn load_draft(&self, draft_id: &str) -> Result<Draft, PortError>;

    /// Fetches the document checklist for a payer/specialty pair
    async fn document_checklist(&self, payer_name: &str, specialty: &str)
        -> Result<Vec<ChecklistItem>, PortError>;
}
