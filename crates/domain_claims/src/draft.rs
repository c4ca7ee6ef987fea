//! Server-side drafts
//!
//! A draft is a partially completed claim form persisted by the backend for
//! later resumption. The client round-trips the raw form text; nothing is
//! derived or validated on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::ClaimFormData;

/// A stored draft as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    #[serde(flatten)]
    pub form: ClaimFormData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Response to saving a draft
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDraftResponse {
    pub draft_id: String,
    #[serde(default)]
    pub message: Option<String>,
}
