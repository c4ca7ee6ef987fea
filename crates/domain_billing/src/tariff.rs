//! Tariff catalogue
//!
//! A tariff is a dated, priced list of billable line items for a hospital,
//! optionally mapped to the payers it was negotiated with. TPA mappings
//! carry the insurance companies the TPA fronts for; insurer mappings may
//! name the TPA that manages them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{HospitalId, LineItemId, PayerId, TariffId};

use crate::error::BillingError;
use domain_registry::{PayerType, ResourceStatus};

/// One priced entry in a tariff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffLineItem {
    pub id: LineItemId,
    /// Billing code, unique within the tariff
    pub code: String,
    pub line_item: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An insurance company a TPA mapping fronts for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliatedInsurer {
    pub payer_id: PayerId,
    pub payer_name: String,
}

/// A payer this tariff was negotiated with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerMapping {
    pub payer_id: PayerId,
    pub payer_name: String,
    pub payer_type: PayerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    /// For TPA mappings: the insurers the TPA manages under this tariff
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affiliated_insurance_companies: Vec<AffiliatedInsurer>,
    /// For insurer mappings: the TPA managing this relationship, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_tpa: Option<AffiliatedInsurer>,
}

/// A tariff as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: TariffId,
    pub tariff_name: String,
    pub tariff_start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    pub hospital_id: HospitalId,
    #[serde(default)]
    pub line_items: Vec<TariffLineItem>,
    #[serde(default)]
    pub payer_mappings: Vec<PayerMapping>,
    pub status: ResourceStatus,
}

impl Tariff {
    /// True if the tariff covers `date` (start inclusive, open end allowed)
    pub fn in_force_on(&self, date: NaiveDate) -> bool {
        if date < self.tariff_start_date {
            return false;
        }
        match self.tariff_end_date {
            Some(end) => date <= end,
            None => true,
        }
    }

    /// Looks a line item up by its billing code
    pub fn line_item_by_code(&self, code: &str) -> Option<&TariffLineItem> {
        self.line_items.iter().find(|li| li.code == code)
    }

    /// True if the tariff is mapped to the given payer
    pub fn covers_payer(&self, payer_id: &PayerId) -> bool {
        self.payer_mappings.iter().any(|m| &m.payer_id == payer_id)
    }

    /// Adds a payer mapping, rejecting duplicates
    pub fn add_payer_mapping(&mut self, mapping: PayerMapping) -> Result<(), BillingError> {
        if self.covers_payer(&mapping.payer_id) {
            return Err(BillingError::DuplicatePayerMapping(
                mapping.payer_name.clone(),
            ));
        }
        self.payer_mappings.push(mapping);
        Ok(())
    }

    /// Removes a payer mapping by payer id
    pub fn remove_payer_mapping(&mut self, payer_id: &PayerId) -> Result<(), BillingError> {
        let before = self.payer_mappings.len();
        self.payer_mappings.retain(|m| &m.payer_id != payer_id);
        if self.payer_mappings.len() == before {
            return Err(BillingError::PayerMappingNotFound(payer_id.to_string()));
        }
        Ok(())
    }
}

/// Filters accepted by the tariff list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct TariffFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,
}

/// Payload for one line item in a tariff create request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateLineItemRequest {
    #[validate(length(min = 1, message = "Line item code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Line item name is required"))]
    pub line_item: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a tariff with its initial line items
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTariffRequest {
    #[validate(length(min = 1, message = "Tariff name is required"))]
    pub tariff_name: String,
    pub tariff_start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[validate(nested)]
    pub line_items: Vec<CreateLineItemRequest>,
}

impl CreateTariffRequest {
    /// Checks invariants that span fields: date order and code uniqueness
    pub fn check_consistency(&self) -> Result<(), BillingError> {
        if let Some(end) = self.tariff_end_date {
            if end < self.tariff_start_date {
                return Err(BillingError::InvalidDateRange {
                    start: self.tariff_start_date,
                    end,
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for item in &self.line_items {
            if !seen.insert(item.code.as_str()) {
                return Err(BillingError::DuplicateLineItemCode(item.code.clone()));
            }
            if item.amount.is_sign_negative() {
                return Err(BillingError::NegativeAmount(item.code.clone()));
            }
        }

        Ok(())
    }
}

/// Payload for updating tariff metadata; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateTariffRequest {
    #[validate(length(min = 1, message = "Tariff name cannot be blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

/// Payload for mapping a payer to a tariff
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayerMappingRequest {
    pub payer_id: PayerId,
    /// For TPA payers: the insurers this mapping fronts for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affiliated_insurance_company_ids: Vec<PayerId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_tariff() -> Tariff {
        Tariff {
            id: TariffId::new(),
            tariff_name: "CGHS 2026".to_string(),
            tariff_start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tariff_end_date: Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
            document_name: None,
            hospital_id: HospitalId::new(),
            line_items: vec![TariffLineItem {
                id: LineItemId::new(),
                code: "RM-101".to_string(),
                line_item: "General ward per day".to_string(),
                amount: dec!(2500),
                description: None,
            }],
            payer_mappings: Vec::new(),
            status: ResourceStatus::Active,
        }
    }

    fn mapping(name: &str) -> PayerMapping {
        PayerMapping {
            payer_id: PayerId::new(),
            payer_name: name.to_string(),
            payer_type: PayerType::InsuranceCompany,
            mapped_at: None,
            mapped_by: None,
            affiliated_insurance_companies: Vec::new(),
            managed_by_tpa: None,
        }
    }

    #[test]
    fn test_in_force_window() {
        let tariff = sample_tariff();
        assert!(tariff.in_force_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
        assert!(tariff.in_force_on(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(tariff.in_force_on(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()));
        assert!(!tariff.in_force_on(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
        assert!(!tariff.in_force_on(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()));
    }

    #[test]
    fn test_open_ended_tariff() {
        let mut tariff = sample_tariff();
        tariff.tariff_end_date = None;
        assert!(tariff.in_force_on(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }

    #[test]
    fn test_line_item_lookup() {
        let tariff = sample_tariff();
        assert!(tariff.line_item_by_code("RM-101").is_some());
        assert!(tariff.line_item_by_code("RM-999").is_none());
    }

    #[test]
    fn test_duplicate_payer_mapping_rejected() {
        let mut tariff = sample_tariff();
        let m = mapping("National Health Assurance");
        let duplicate = m.clone();

        tariff.add_payer_mapping(m).unwrap();
        let err = tariff.add_payer_mapping(duplicate).unwrap_err();
        assert!(matches!(err, BillingError::DuplicatePayerMapping(_)));
    }

    #[test]
    fn test_remove_missing_mapping_errors() {
        let mut tariff = sample_tariff();
        let err = tariff.remove_payer_mapping(&PayerId::new()).unwrap_err();
        assert!(matches!(err, BillingError::PayerMappingNotFound(_)));
    }

    #[test]
    fn test_create_request_consistency() {
        let request = CreateTariffRequest {
            tariff_name: "CGHS 2026".to_string(),
            tariff_start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tariff_end_date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            document_name: None,
            line_items: Vec::new(),
        };
        assert!(matches!(
            request.check_consistency(),
            Err(BillingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_create_request_duplicate_codes() {
        let item = CreateLineItemRequest {
            code: "RM-101".to_string(),
            line_item: "General ward".to_string(),
            amount: dec!(2500),
            description: None,
        };
        let request = CreateTariffRequest {
            tariff_name: "CGHS 2026".to_string(),
            tariff_start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            tariff_end_date: None,
            document_name: None,
            line_items: vec![item.clone(), item],
        };
        assert!(matches!(
            request.check_consistency(),
            Err(BillingError::DuplicateLineItemCode(_))
        ));
    }
}
