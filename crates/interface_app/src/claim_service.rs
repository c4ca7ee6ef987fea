//! Claim form service
//!
//! The uniform seam between the claim screens and the claims domain: every
//! keystroke goes through `handle_change` (the pure reducer), and
//! submission runs the full validation gate before anything touches the
//! network.

use std::sync::Arc;

use domain_claims::{
    ChecklistItem, ClaimFormData, ClaimsPort, SaveDraftResponse, SubmitClaimResponse,
    UploadedDocument,
};

use crate::error::AppError;

/// Drives the claim submission page and the claim dialog
pub struct ClaimFormService {
    port: Arc<dyn ClaimsPort>,
}

impl ClaimFormService {
    pub fn new(port: Arc<dyn ClaimsPort>) -> Self {
        Self { port }
    }

    /// Applies one field edit and returns the next form state
    ///
    /// Pure pass-through to the domain reducer so every surface edits the
    /// form the same way.
    pub fn handle_change(&self, form: &ClaimFormData, field: &str, value: &str) -> ClaimFormData {
        form.apply_change(field, value)
    }

    /// Validates and submits the claim
    ///
    /// A form that fails validation (including the over-authorization
    /// check) is rejected here; the backend never sees it.
    pub async fn submit(
        &self,
        form: &ClaimFormData,
        documents: Vec<UploadedDocument>,
    ) -> Result<SubmitClaimResponse, AppError> {
        let validation = form.validate_for_submission();
        if !validation.is_valid {
            tracing::debug!(errors = ?validation.errors, "claim submission blocked");
            return Err(AppError::Validation(validation.errors));
        }

        let payload = form.submission_payload(documents);
        let response = self.port.submit_claim(&payload).await?;
        tracing::info!(claim_id = %response.claim_id, "claim submitted");
        Ok(response)
    }

    /// Saves the form as a draft; drafts skip submission validation
    pub async fn save_draft(
        &self,
        form: &ClaimFormData,
        documents: Vec<UploadedDocument>,
    ) -> Result<SaveDraftResponse, AppError> {
        let payload = form.submission_payload(documents);
        Ok(self.port.save_draft(&payload).await?)
    }

    /// Loads a draft back into an editable form
    pub async fn resume_draft(&self, draft_id: &str) -> Result<ClaimFormData, AppError> {
        let draft = self.port.load_draft(draft_id).await?;
        Ok(draft.form)
    }

    /// The document checklist for the form's payer/specialty pair
    ///
    /// Empty until both fields are chosen, matching when the checklist
    /// panel appears.
    pub async fn checklist(&self, form: &ClaimFormData) -> Result<Vec<ChecklistItem>, AppError> {
        if !form.checklist_visible() {
            return Ok(Vec::new());
        }
        Ok(self
            .port
            .document_checklist(&form.payer_name, &form.specialty)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{DomainPort, PortError};
    use domain_claims::{
        Claim, ClaimListItem, ClaimStatistics, ClaimStatus, ClaimSubmission, ClaimsListParams,
        Draft,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClaimsPort {
        submissions: AtomicUsize,
        last_payload: Mutex<Option<ClaimSubmission>>,
    }

    impl DomainPort for RecordingClaimsPort {}

    #[async_trait]
    impl ClaimsPort for RecordingClaimsPort {
        async fn submit_claim(
            &self,
            submission: &ClaimSubmission,
        ) -> Result<SubmitClaimResponse, PortError> {
            self.submissions.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(submission.clone());
            Ok(SubmitClaimResponse {
                claim_id: "CLM-42".to_string(),
                message: None,
            })
        }

        async fn list_claims(
            &self,
            _params: &ClaimsListParams,
        ) -> Result<Vec<ClaimListItem>, PortError> {
            Ok(Vec::new())
        }

        async fn claim_details(&self, claim_id: &str) -> Result<Claim, PortError> {
            Err(PortError::not_found("Claim", claim_id))
        }

        async fn update_status(
            &self,
            _claim_id: &str,
            _status: ClaimStatus,
        ) -> Result<(), PortError> {
            Ok(())
        }

        async fn delete_claim(&self, _claim_id: &str) -> Result<(), PortError> {
            Ok(())
        }

        async fn statistics(
            &self,
            _hospital_id: Option<&str>,
        ) -> Result<ClaimStatistics, PortError> {
            Ok(ClaimStatistics::default())
        }

        async fn save_draft(
            &self,
            _submission: &ClaimSubmission,
        ) -> Result<SaveDraftResponse, PortError> {
            Ok(SaveDraftResponse {
                draft_id: "d-7".to_string(),
                message: None,
            })
        }

        async fn load_draft(&self, draft_id: &str) -> Result<Draft, PortError> {
            let mut form = ClaimFormData::new();
            form.patient_name = "Meena Iyer".to_string();
            form.total_bill_amount = "10000".to_string();
            Ok(Draft {
                draft_id: draft_id.to_string(),
                form,
                saved_at: None,
            })
        }

        async fn document_checklist(
            &self,
            _payer_name: &str,
            _specialty: &str,
        ) -> Result<Vec<ChecklistItem>, PortError> {
            Ok(vec![ChecklistItem {
                document_type: "DISCHARGE_SUMMARY".to_string(),
                description: "Discharge summary".to_string(),
                mandatory: true,
            }])
        }
    }

    fn submittable_form() -> ClaimFormData {
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

    #[tokio::test]
    async fn test_submit_valid_form() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port.clone());

        let response = service.submit(&submittable_form(), Vec::new()).await.unwrap();
        assert_eq!(response.claim_id, "CLM-42");
        assert_eq!(port.submissions.load(Ordering::SeqCst), 1);

        let payload = port.last_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.form.claimed_amount, "7800.00");
    }

    #[tokio::test]
    async fn test_over_authorized_claim_never_reaches_network() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port.clone());

        let form = submittable_form().apply_change("total_authorized_amount", "5000");
        let err = service.submit(&form, Vec::new()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(port.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_incomplete_form_blocked() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port.clone());

        let form = submittable_form().apply_change("doctor", "");
        let err = service.submit(&form, Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(port.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_draft_roundtrip() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port);

        // Drafts save even when the form would fail submission validation
        let mut form = ClaimFormData::new();
        form.patient_name = "Meena Iyer".to_string();
        let saved = service.save_draft(&form, Vec::new()).await.unwrap();
        assert_eq!(saved.draft_id, "d-7");

        let resumed = service.resume_draft("d-7").await.unwrap();
        assert_eq!(resumed.patient_name, "Meena Iyer");
    }

    #[tokio::test]
    async fn test_checklist_hidden_until_payer_and_specialty() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port);

        let form = ClaimFormData::new();
        assert!(service.checklist(&form).await.unwrap().is_empty());

        let form = form
            .apply_change("payer_name", "National Health Assurance")
            .apply_change("specialty", "Cardiology");
        let checklist = service.checklist(&form).await.unwrap();
        assert_eq!(checklist.len(), 1);
    }

    #[tokio::test]
    async fn test_handle_change_runs_reducer() {
        let port = Arc::new(RecordingClaimsPort::default());
        let service = ClaimFormService::new(port);

        let form = ClaimFormData::new();
        let form = service.handle_change(&form, "total_bill_amount", "10000");
        let form = service.handle_change(&form, "mou_discount_amount", "250");
        assert_eq!(form.claimed_amount, "9750.00");
    }
}
