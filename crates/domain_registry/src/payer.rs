//! Payers and the payer affiliation workflow
//!
//! The master payer catalogue lives in the backend. A hospital affiliates
//! itself with the payers it works with; claims and tariff mappings can
//! only reference affiliated payers. The lookup helper reports whether a
//! payer still needs affiliation so callers can offer the one-click flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{AffiliationId, PayerId};

use crate::common::ResourceStatus;

/// Category of a payer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayerType {
    #[serde(rename = "CENTRAL GOVERNMENT")]
    CentralGovernment,
    #[serde(rename = "STATE GOVERNMENT")]
    StateGovernment,
    #[serde(rename = "INSURANCE COMPANY")]
    InsuranceCompany,
    #[serde(rename = "CORPORATE")]
    Corporate,
    #[serde(rename = "TPA")]
    Tpa,
    #[serde(rename = "INTERNATIONAL")]
    International,
}

impl PayerType {
    /// TPAs manage claims on behalf of insurance companies, so a TPA payer
    /// requires the underwriting insurer to be named alongside it
    pub fn requires_insurer(&self) -> bool {
        matches!(self, PayerType::Tpa)
    }
}

/// A payer from the master catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub id: PayerId,
    pub name: String,
    #[serde(rename = "type")]
    pub payer_type: PayerType,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
}

/// An affiliation between the hospital and a payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerAffiliation {
    pub id: AffiliationId,
    pub payer_id: PayerId,
    pub payer_name: String,
    pub payer_type: PayerType,
    pub payer_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliated_by_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliated_at: Option<DateTime<Utc>>,
}

/// Filters accepted by the affiliation list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayerAffiliationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_type: Option<PayerType>,
}

/// Payload for affiliating a payer; the backend resolves the payer by name
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePayerAffiliationRequest {
    #[validate(length(min = 1, message = "Payer name is required"))]
    pub payer_name: String,
}

/// Payload for updating an affiliation
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePayerAffiliationRequest {
    pub status: ResourceStatus,
}

/// The catalogue split into what is and is not yet affiliated
#[derive(Debug, Clone, Deserialize)]
pub struct AvailablePayers {
    pub available_payers: Vec<Payer>,
    /// Names of payers the hospital is already affiliated with
    pub affiliated_payers: Vec<String>,
}

/// Result of looking a payer up by id in the catalogue
#[derive(Debug, Clone)]
pub struct PayerLookup {
    pub payer: Payer,
    pub is_affiliated: bool,
}

impl PayerLookup {
    pub fn needs_affiliation(&self) -> bool {
        !self.is_affiliated
    }
}

impl AvailablePayers {
    /// Finds a payer by id and reports its affiliation state
    pub fn find_by_id(&self, payer_id: &PayerId) -> Option<PayerLookup> {
        let payer = self.available_payers.iter().find(|p| &p.id == payer_id)?;
        let is_affiliated = self.affiliated_payers.contains(&payer.name);
        Some(PayerLookup {
            payer: payer.clone(),
            is_affiliated,
        })
    }

    /// Payers of a given type that are not yet affiliated
    pub fn unaffiliated_of_type(&self, payer_type: PayerType) -> Vec<&Payer> {
        self.available_payers
            .iter()
            .filter(|p| p.payer_type == payer_type && !self.affiliated_payers.contains(&p.name))
            .collect()
    }
}
