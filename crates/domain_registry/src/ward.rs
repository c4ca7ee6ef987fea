//! Ward catalogue

use serde::{Deserialize, Serialize};

use core_kernel::{HospitalId, WardId};

use crate::common::ResourceStatus;

/// A ward type offered by the hospital (general, semi-private, ICU, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub ward_id: WardId,
    pub ward_name: String,
    pub hospital_id: HospitalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_count: Option<u32>,
    pub status: ResourceStatus,
}
