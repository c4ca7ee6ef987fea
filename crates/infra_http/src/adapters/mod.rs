//! Backend adapters
//!
//! One adapter per domain port, each a thin path map over the shared
//! gateway. Response envelopes mirror the backend's wire shapes and are
//! unwrapped here so the domains only ever see their own types.

mod auth;
mod claims;
mod departments;
mod doctors;
mod payers;
mod specialties;
mod staff;
mod tariffs;
mod tds;
mod wards;

pub use auth::AuthGateway;
pub use claims::ClaimsGateway;
pub use departments::DepartmentsGateway;
pub use doctors::DoctorsGateway;
pub use payers::PayersGateway;
pub use specialties::SpecialtiesGateway;
pub use staff::StaffGateway;
pub use tariffs::TariffsGateway;
pub use tds::TdsGateway;
pub use wards::WardsGateway;

use serde::Deserialize;

use core_kernel::BulkOutcome;

/// Wire shape of a backend bulk-operation result
#[derive(Debug, Deserialize)]
pub(crate) struct BulkResultEnvelope {
    #[serde(default, alias = "successful_affiliations", alias = "created")]
    successful: Vec<BulkSuccessRow>,
    #[serde(default, alias = "failed_affiliations")]
    failed: Vec<BulkFailureRow>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum BulkSuccessRow {
    Name(String),
    Row {
        #[serde(alias = "payer_name", alias = "item")]
        name: String,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkFailureRow {
    #[serde(alias = "payer_name", alias = "item")]
    name: String,
    error: String,
}

impl BulkResultEnvelope {
    pub(crate) fn into_outcome(self) -> BulkOutcome<String> {
        let mut outcome = BulkOutcome::new();
        for row in self.successful {
            let name = match row {
                BulkSuccessRow::Name(name) => name,
                BulkSuccessRow::Row { name } => name,
            };
            outcome.record_success(name);
        }
        for row in self.failed {
            outcome.record_failure(row.name, row.error);
        }
        outcome
    }
}

/// Acknowledgement body for deletes and other fire-and-forget calls
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}
