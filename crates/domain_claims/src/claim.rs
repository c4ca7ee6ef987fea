//! Submitted claim model
//!
//! The typed shape of a claim as the backend returns it: four detail blocks
//! plus status and audit fields. Parsed at the boundary; nothing downstream
//! touches loose JSON.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Claim lifecycle status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Settled,
}

/// Patient block of a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub patient_name: String,
    pub age: u16,
    pub age_unit: AgeUnit,
    pub gender: String,
    pub id_card_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_email_id: Option<String>,
    pub beneficiary_type: String,
    pub relationship: String,
}

/// Unit for the patient's age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeUnit {
    #[serde(rename = "DAYS")]
    Days,
    #[serde(rename = "MONTHS")]
    Months,
    #[serde(rename = "YRS")]
    Years,
}

/// Payer block of a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayerDetails {
    pub payer_patient_id: String,
    pub authorization_number: String,
    pub total_authorized_amount: Decimal,
    pub payer_type: String,
    pub payer_name: String,
    #[serde(default)]
    pub insurer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub sponsorer_corporate_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorer_employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorer_employee_name: Option<String>,
}

/// Provider block of a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDetails {
    pub patient_registration_number: String,
    pub specialty: String,
    pub doctor: String,
    pub treatment_line: String,
    pub claim_type: String,
    pub service_start_date: NaiveDate,
    pub service_end_date: NaiveDate,
    pub inpatient_number: String,
    pub admission_type: String,
    pub hospitalization_type: String,
    pub ward_type: String,
    pub final_diagnosis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd_10_code: Option<String>,
    pub treatment_done: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcs_code: Option<String>,
}

/// Bill block of a claim; amounts are decimal, not floats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDetails {
    pub bill_number: String,
    pub bill_date: NaiveDate,
    #[serde(default)]
    pub security_deposit: Decimal,
    pub total_bill_amount: Decimal,
    #[serde(default)]
    pub patient_discount_amount: Decimal,
    #[serde(default)]
    pub amount_paid_by_patient: Decimal,
    #[serde(default)]
    pub total_patient_paid_amount: Decimal,
    #[serde(default)]
    pub amount_charged_to_payer: Decimal,
    #[serde(default)]
    pub mou_discount_amount: Decimal,
    pub claimed_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_remarks: Option<String>,
}

/// A claim as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub claim_status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<DateTime<Utc>>,
    pub patient_details: PatientDetails,
    pub payer_details: PayerDetails,
    pub provider_details: ProviderDetails,
    pub bill_details: BillDetails,
    pub hospital_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by_email: Option<String>,
}

/// Compact row for claim list screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimListItem {
    pub claim_id: String,
    pub claim_status: ClaimStatus,
    pub patient_name: String,
    pub payer_name: String,
    pub claimed_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ClaimStatus::UnderReview).unwrap(),
            "\"under_review\""
        );
        let parsed: ClaimStatus = serde_json::from_str("\"settled\"").unwrap();
        assert_eq!(parsed, ClaimStatus::Settled);
    }

    #[test]
    fn test_age_unit_wire_format() {
        assert_eq!(serde_json::to_string(&AgeUnit::Years).unwrap(), "\"YRS\"");
    }

    #[test]
    fn test_bill_details_defaults_optional_amounts() {
        let json = r#"{
            "bill_number": "B-1",
            "bill_date": "2026-01-15",
            "total_bill_amount": "10000",
            "claimed_amount": "7800.00"
        }"#;
        let bill: BillDetails = serde_json::from_str(json).unwrap();
        assert_eq!(bill.patient_discount_amount, Decimal::ZERO);
        assert_eq!(bill.claimed_amount, "7800.00".parse::<Decimal>().unwrap());
    }
}
