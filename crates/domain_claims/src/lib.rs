//! Claims Domain
//!
//! This crate implements the inpatient claim form: the bill-amount
//! derivation reducer, pre-submission validation, drafts, and the document
//! checklist. All persistence is remote; the form lives only for the
//! duration of a session.
//!
//! The one piece of real logic here is the bill derivation in [`bill`]:
//! a pure reducer that recomputes the dependent amounts whenever a
//! contributing field changes. Everything else is typed state and
//! validation over it.

pub mod bill;
pub mod checklist;
pub mod claim;
pub mod draft;
pub mod error;
pub mod form;
pub mod ports;

pub use bill::{derive_bill, parse_amount, BillField, BillFields};
pub use checklist::{ChecklistItem, UploadedDocument};
pub use claim::{
    AgeUnit, BillDetails, Claim, ClaimListItem, ClaimStatus, PatientDetails, PayerDetails,
    ProviderDetails,
};
pub use draft::{Draft, SaveDraftResponse};
pub use error::ClaimError;
pub use form::{ClaimFormData, ClaimSubmission};
pub use ports::{ClaimStatistics, ClaimsListParams, ClaimsPort, SubmitClaimResponse};
