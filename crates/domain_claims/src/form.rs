//! Claim form state and the uniform change reducer
//!
//! The form holds every field as raw entry text for the lifetime of one
//! editing session. All edits funnel through [`ClaimFormData::apply_change`]:
//! it stores the new value, runs the bill derivation, and applies the
//! coupled-field rules (changing beneficiary type resets the relationship,
//! changing specialty resets the doctor, a non-TPA payer clears the insurer).
//!
//! Submission is gated by [`ClaimFormData::validate_for_submission`]; the
//! over-authorization check runs there, before any network call is made.

use serde::{Deserialize, Serialize};

use core_kernel::ValidationResult;

use crate::bill::{derive_bill, parse_amount, BillField, BillFields};
use crate::checklist::UploadedDocument;

/// The inpatient claim form, exactly as entered
///
/// Fields a draft omits deserialize as empty; a resumed draft is just a
/// partially filled form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimFormData {
    // Patient details
    pub patient_name: String,
    pub age: String,
    pub age_unit: String,
    pub gender: String,
    pub id_card_type: String,
    pub id_card_number: String,
    pub patient_contact_number: String,
    pub patient_email_id: String,
    pub beneficiary_type: String,
    pub relationship: String,

    // Payer details
    pub payer_patient_id: String,
    pub authorization_number: String,
    pub total_authorized_amount: String,
    pub payer_type: String,
    pub payer_name: String,
    pub insurer_name: String,
    pub policy_number: String,
    pub sponsorer_corporate_name: String,
    pub sponsorer_employee_id: String,
    pub sponsorer_employee_name: String,

    // Provider details
    pub patient_registration_number: String,
    pub specialty: String,
    pub doctor: String,
    pub treatment_line: String,
    pub claim_type: String,
    pub service_start_date: String,
    pub service_end_date: String,
    pub inpatient_number: String,
    pub admission_type: String,
    pub hospitalization_type: String,
    pub ward_type: String,
    pub final_diagnosis: String,
    pub icd_10_code: String,
    pub treatment_done: String,
    pub pcs_code: String,

    // Bill details
    pub bill_number: String,
    pub bill_date: String,
    pub security_deposit: String,
    pub total_bill_amount: String,
    pub patient_discount_amount: String,
    pub amount_paid_by_patient: String,
    pub total_patient_paid_amount: String,
    pub amount_charged_to_payer: String,
    pub mou_discount_amount: String,
    pub claimed_amount: String,
    pub submission_remarks: String,
}

/// Fields that must be filled before a claim can be submitted
const REQUIRED_FIELDS: &[&str] = &[
    "patient_name",
    "age",
    "gender",
    "beneficiary_type",
    "relationship",
    "authorization_number",
    "total_authorized_amount",
    "payer_type",
    "payer_name",
    "specialty",
    "doctor",
    "claim_type",
    "service_start_date",
    "service_end_date",
    "admission_type",
    "ward_type",
    "final_diagnosis",
    "treatment_done",
    "bill_number",
    "bill_date",
    "total_bill_amount",
    "claimed_amount",
];

impl ClaimFormData {
    /// A fresh form; inpatient is the default claim type and years the
    /// default age unit
    pub fn new() -> Self {
        Self {
            age_unit: "YRS".to_string(),
            claim_type: "INPATIENT".to_string(),
            ..Default::default()
        }
    }

    /// Returns the current value of a field by its form name
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "patient_name" => &self.patient_name,
            "age" => &self.age,
            "age_unit" => &self.age_unit,
            "gender" => &self.gender,
            "id_card_type" => &self.id_card_type,
            "id_card_number" => &self.id_card_number,
            "patient_contact_number" => &self.patient_contact_number,
            "patient_email_id" => &self.patient_email_id,
            "beneficiary_type" => &self.beneficiary_type,
            "relationship" => &self.relationship,
            "payer_patient_id" => &self.payer_patient_id,
            "authorization_number" => &self.authorization_number,
            "total_authorized_amount" => &self.total_authorized_amount,
            "payer_type" => &self.payer_type,
            "payer_name" => &self.payer_name,
            "insurer_name" => &self.insurer_name,
            "policy_number" => &self.policy_number,
            "sponsorer_corporate_name" => &self.sponsorer_corporate_name,
            "sponsorer_employee_id" => &self.sponsorer_employee_id,
            "sponsorer_employee_name" => &self.sponsorer_employee_name,
            "patient_registration_number" => &self.patient_registration_number,
            "specialty" => &self.specialty,
            "doctor" => &self.doctor,
            "treatment_line" => &self.treatment_line,
            "claim_type" => &self.claim_type,
            "service_start_date" => &self.service_start_date,
            "service_end_date" => &self.service_end_date,
            "inpatient_number" => &self.inpatient_number,
            "admission_type" => &self.admission_type,
            "hospitalization_type" => &self.hospitalization_type,
            "ward_type" => &self.ward_type,
            "final_diagnosis" => &self.final_diagnosis,
            "icd_10_code" => &self.icd_10_code,
            "treatment_done" => &self.treatment_done,
            "pcs_code" => &self.pcs_code,
            "bill_number" => &self.bill_number,
            "bill_date" => &self.bill_date,
            "security_deposit" => &self.security_deposit,
            "total_bill_amount" => &self.total_bill_amount,
            "patient_discount_amount" => &self.patient_discount_amount,
            "amount_paid_by_patient" => &self.amount_paid_by_patient,
            "total_patient_paid_amount" => &self.total_patient_paid_amount,
            "amount_charged_to_payer" => &self.amount_charged_to_payer,
            "mou_discount_amount" => &self.mou_discount_amount,
            "claimed_amount" => &self.claimed_amount,
            "submission_remarks" => &self.submission_remarks,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Applies one field edit and returns the full next form state
    ///
    /// Unknown field names leave the state untouched. `claimed_amount` is
    /// not directly editable; an attempt to set it is ignored and the
    /// derived value stands.
    pub fn apply_change(&self, field: &str, value: &str) -> ClaimFormData {
        let mut next = self.clone();

        if let Some(bill_field) = bill_field_for(field) {
            let bill = derive_bill(&next.bill_view(), bill_field, value);
            next.store_bill(bill);
            return next;
        }

        match field {
            "patient_name" => next.patient_name = value.to_string(),
            "age" => next.age = value.to_string(),
            "age_unit" => next.age_unit = value.to_string(),
            "gender" => next.gender = value.to_string(),
            "id_card_type" => next.id_card_type = value.to_string(),
            "id_card_number" => next.id_card_number = value.to_string(),
            "patient_contact_number" => next.patient_contact_number = value.to_string(),
            "patient_email_id" => next.patient_email_id = value.to_string(),
            "beneficiary_type" => {
                next.beneficiary_type = value.to_string();
                // Relationship options depend on beneficiary type
                next.relationship = String::new();
            }
            "relationship" => next.relationship = value.to_string(),
            "payer_patient_id" => next.payer_patient_id = value.to_string(),
            "authorization_number" => next.authorization_number = value.to_string(),
            "total_authorized_amount" => next.total_authorized_amount = value.to_string(),
            "payer_type" => {
                next.payer_type = value.to_string();
                if value != "TPA" {
                    next.insurer_name = String::new();
                }
            }
            "payer_name" => next.payer_name = value.to_string(),
            "insurer_name" => next.insurer_name = value.to_string(),
            "policy_number" => next.policy_number = value.to_string(),
            "sponsorer_corporate_name" => next.sponsorer_corporate_name = value.to_string(),
            "sponsorer_employee_id" => next.sponsorer_employee_id = value.to_string(),
            "sponsorer_employee_name" => next.sponsorer_employee_name = value.to_string(),
            "patient_registration_number" => {
                next.patient_registration_number = value.to_string()
            }
            "specialty" => {
                next.specialty = value.to_string();
                // The doctor list is scoped to the specialty
                next.doctor = String::new();
            }
            "doctor" => next.doctor = value.to_string(),
            "treatment_line" => next.treatment_line = value.to_string(),
            "claim_type" => next.claim_type = value.to_string(),
            "service_start_date" => next.service_start_date = value.to_string(),
            "service_end_date" => next.service_end_date = value.to_string(),
            "inpatient_number" => next.inpatient_number = value.to_string(),
            "admission_type" => next.admission_type = value.to_string(),
            "hospitalization_type" => next.hospitalization_type = value.to_string(),
            "ward_type" => next.ward_type = value.to_string(),
            "final_diagnosis" => next.final_diagnosis = value.to_string(),
            "icd_10_code" => next.icd_10_code = value.to_string(),
            "treatment_done" => next.treatment_done = value.to_string(),
            "pcs_code" => next.pcs_code = value.to_string(),
            "bill_number" => next.bill_number = value.to_string(),
            "bill_date" => next.bill_date = value.to_string(),
            "security_deposit" => next.security_deposit = value.to_string(),
            "submission_remarks" => next.submission_remarks = value.to_string(),
            "claimed_amount" => {
                tracing::debug!("ignoring direct edit of derived field claimed_amount");
            }
            other => {
                tracing::warn!(field = other, "change for unknown form field ignored");
            }
        }

        next
    }

    /// The bill fields as a unit, for the derivation reducer
    pub fn bill_view(&self) -> BillFields {
        BillFields {
            total_bill_amount: self.total_bill_amount.clone(),
            patient_discount_amount: self.patient_discount_amount.clone(),
            amount_paid_by_patient: self.amount_paid_by_patient.clone(),
            total_patient_paid_amount: self.total_patient_paid_amount.clone(),
            amount_charged_to_payer: self.amount_charged_to_payer.clone(),
            mou_discount_amount: self.mou_discount_amount.clone(),
            claimed_amount: self.claimed_amount.clone(),
        }
    }

    fn store_bill(&mut self, bill: BillFields) {
        self.total_bill_amount = bill.total_bill_amount;
        self.patient_discount_amount = bill.patient_discount_amount;
        self.amount_paid_by_patient = bill.amount_paid_by_patient;
        self.total_patient_paid_amount = bill.total_patient_paid_amount;
        self.amount_charged_to_payer = bill.amount_charged_to_payer;
        self.mou_discount_amount = bill.mou_discount_amount;
        self.claimed_amount = bill.claimed_amount;
    }

    /// Relationship options allowed for the current beneficiary type
    pub fn relationship_options(&self) -> &'static [&'static str] {
        match self.beneficiary_type.as_str() {
            "SELF" | "SELF (Individual Policy)" => &["SELF"],
            "DEPENDANT" => &[
                "SPOUSE", "SON", "DAUGHTER", "FATHER", "MOTHER", "BROTHER", "SISTER", "OTHER",
            ],
            _ => &["SELF", "SPOUSE", "SON", "DAUGHTER", "FATHER", "MOTHER", "OTHER"],
        }
    }

    /// The document checklist appears once payer and specialty are chosen
    pub fn checklist_visible(&self) -> bool {
        !self.payer_name.trim().is_empty() && !self.specialty.trim().is_empty()
    }

    /// Runs every pre-submission check
    ///
    /// This is the gate in front of the network: a claim whose
    /// `claimed_amount` exceeds `total_authorized_amount` is rejected here
    /// and never dispatched.
    pub fn validate_for_submission(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for field in REQUIRED_FIELDS {
            if let Some(value) = self.field(field) {
                result.require(field, value);
            }
        }

        if !self.patient_email_id.trim().is_empty()
            && !is_plausible_email(&self.patient_email_id)
        {
            result.add_error(format!("Invalid email format: {}", self.patient_email_id));
        }

        if !self.patient_contact_number.trim().is_empty()
            && self.patient_contact_number.trim().len() < 10
        {
            result.add_error("Patient contact number must have at least 10 digits");
        }

        if self.payer_type == "TPA" && self.insurer_name.trim().is_empty() {
            result.add_error("insurer_name is required for TPA payers");
        }

        let claimed = parse_amount(&self.claimed_amount);
        let authorized = parse_amount(&self.total_authorized_amount);
        if claimed > authorized {
            result.add_error(format!(
                "Claimed Amount (₹{claimed}) cannot exceed Total Authorized Amount (₹{authorized})"
            ));
        }

        result
    }

    /// Normalizes the form for submission
    ///
    /// Amount fields the user left blank go out as "0" so the backend's
    /// numeric conversion never sees an empty string; uploaded documents
    /// ride along with the form payload.
    pub fn submission_payload(&self, documents: Vec<UploadedDocument>) -> ClaimSubmission {
        let zero_if_blank = |s: &str| {
            if s.trim().is_empty() {
                "0".to_string()
            } else {
                s.to_string()
            }
        };

        let mut form = self.clone();
        form.age = zero_if_blank(&form.age);
        form.total_authorized_amount = zero_if_blank(&form.total_authorized_amount);
        form.security_deposit = zero_if_blank(&form.security_deposit);
        form.total_bill_amount = zero_if_blank(&form.total_bill_amount);
        form.patient_discount_amount = zero_if_blank(&form.patient_discount_amount);
        form.amount_paid_by_patient = zero_if_blank(&form.amount_paid_by_patient);
        form.total_patient_paid_amount = zero_if_blank(&form.total_patient_paid_amount);
        form.amount_charged_to_payer = zero_if_blank(&form.amount_charged_to_payer);
        form.mou_discount_amount = zero_if_blank(&form.mou_discount_amount);
        form.claimed_amount = zero_if_blank(&form.claimed_amount);

        ClaimSubmission { form, documents }
    }
}

/// A validated form plus its attached documents, ready to send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSubmission {
    #[serde(flatten)]
    pub form: ClaimFormData,
    #[serde(default)]
    pub documents: Vec<UploadedDocument>,
}

fn bill_field_for(field: &str) -> Option<BillField> {
    match field {
        "total_bill_amount" => Some(BillField::TotalBillAmount),
        "patient_discount_amount" => Some(BillField::PatientDiscountAmount),
        "amount_paid_by_patient" => Some(BillField::AmountPaidByPatient),
        "total_patient_paid_amount" => Some(BillField::TotalPatientPaidAmount),
        "amount_charged_to_payer" => Some(BillField::AmountChargedToPayer),
        "mou_discount_amount" => Some(BillField::MouDiscountAmount),
        _ => None,
    }
}

fn is_plausible_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ClaimFormData {
        let mut form = ClaimFormData::new();
        for (field, value) in [
            ("patient_name", "Meena Iyer"),
            ("age", "42"),
            ("gender", "FEMALE"),
            ("beneficiary_type", "SELF"),
            ("relationship", "SELF"),
            ("authorization_number", "AUTH-991"),
            ("total_authorized_amount", "50000"),
            ("payer_type", "INSURANCE COMPANY"),
            ("payer_name", "National Health Assurance"),
            ("specialty", "Cardiology"),
            ("doctor", "Dr. Prakash Nair"),
            ("service_start_date", "2026-01-10"),
            ("service_end_date", "2026-01-14"),
            ("admission_type", "PLANNED"),
            ("ward_type", "GENERAL"),
            ("final_diagnosis", "CAD"),
            ("treatment_done", "Angioplasty"),
            ("bill_number", "B-2212"),
            ("bill_date", "2026-01-14"),
            ("total_bill_amount", "10000"),
            ("patient_discount_amount", "500"),
            ("amount_paid_by_patient", "1500"),
            ("mou_discount_amount", "200"),
        ] {
            form = form.apply_change(field, value);
        }
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ClaimFormData::new();
        assert_eq!(form.claim_type, "INPATIENT");
        assert_eq!(form.age_unit, "YRS");
        assert!(form.patient_name.is_empty());
    }

    #[test]
    fn test_bill_fields_flow_through_reducer() {
        let form = filled_form();
        assert_eq!(form.total_patient_paid_amount, "2000");
        assert_eq!(form.amount_charged_to_payer, "8000");
        assert_eq!(form.claimed_amount, "7800.00");
    }

    #[test]
    fn test_beneficiary_change_resets_relationship() {
        let form = filled_form();
        assert_eq!(form.relationship, "SELF");

        let form = form.apply_change("beneficiary_type", "DEPENDANT");
        assert!(form.relationship.is_empty());
        assert!(form.relationship_options().contains(&"SPOUSE"));
    }

    #[test]
    fn test_specialty_change_resets_doctor() {
        let form = filled_form();
        let form = form.apply_change("specialty", "Nephrology");
        assert!(form.doctor.is_empty());
    }

    #[test]
    fn test_non_tpa_payer_clears_insurer() {
        let form = filled_form()
            .apply_change("payer_type", "TPA")
            .apply_change("insurer_name", "United Insurance");
        assert_eq!(form.insurer_name, "United Insurance");

        let form = form.apply_change("payer_type", "CORPORATE");
        assert!(form.insurer_name.is_empty());
    }

    #[test]
    fn test_claimed_amount_not_directly_editable() {
        let form = filled_form();
        let tampered = form.apply_change("claimed_amount", "1");
        assert_eq!(tampered.claimed_amount, "7800.00");
    }

    #[test]
    fn test_checklist_visibility() {
        let mut form = ClaimFormData::new();
        assert!(!form.checklist_visible());
        form = form.apply_change("payer_name", "National Health Assurance");
        assert!(!form.checklist_visible());
        form = form.apply_change("specialty", "Cardiology");
        assert!(form.checklist_visible());
    }

    #[test]
    fn test_valid_form_passes() {
        let result = filled_form().validate_for_submission();
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_missing_required_field_blocks_submission() {
        let form = filled_form().apply_change("patient_name", "");
        let result = form.validate_for_submission();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("patient_name")));
    }

    #[test]
    fn test_over_authorized_claim_rejected_before_dispatch() {
        let form = filled_form().apply_change("total_authorized_amount", "5000");
        let result = form.validate_for_submission();
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("cannot exceed Total Authorized Amount")));
    }

    #[test]
    fn test_claim_at_authorized_limit_passes() {
        let form = filled_form().apply_change("total_authorized_amount", "7800");
        let result = form.validate_for_submission();
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_bad_patient_email_rejected() {
        let form = filled_form().apply_change("patient_email_id", "nope");
        let result = form.validate_for_submission();
        assert!(!result.is_valid);
    }

    #[test]
    fn test_tpa_requires_insurer() {
        let form = filled_form().apply_change("payer_type", "TPA");
        let result = form.validate_for_submission();
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("insurer_name")));
    }

    #[test]
    fn test_submission_payload_zero_fills_blank_amounts() {
        let mut form = filled_form();
        form.security_deposit = String::new();
        form.mou_discount_amount = "  ".to_string();

        let payload = form.submission_payload(Vec::new());
        assert_eq!(payload.form.security_deposit, "0");
        assert_eq!(payload.form.mou_discount_amount, "0");
        assert_eq!(payload.form.claimed_amount, "7800.00");
    }
}
