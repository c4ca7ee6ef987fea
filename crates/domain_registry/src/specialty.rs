//! Specialties and the hospital's specialty affiliation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{HospitalId, SpecialtyId};

/// A medical specialty from the master catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub specialty_id: SpecialtyId,
    pub specialty_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The set of specialties a hospital has affiliated itself with
///
/// The backend keeps one affiliation record per hospital; adding
/// specialties is a create-or-update of that record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyAffiliation {
    pub hospital_id: HospitalId,
    pub specialty_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SpecialtyAffiliation {
    /// Names in the catalogue not yet affiliated, preserving catalogue order
    pub fn unaffiliated<'a>(&self, catalogue: &'a [Specialty]) -> Vec<&'a Specialty> {
        catalogue
            .iter()
            .filter(|s| !self.specialty_names.contains(&s.specialty_name))
            .collect()
    }

    /// Adds names, skipping any already present
    pub fn add_specialties(&mut self, names: impl IntoIterator<Item = String>) -> usize {
        let mut added = 0;
        for name in names {
            if !self.specialty_names.contains(&name) {
                self.specialty_names.push(name);
                added += 1;
            }
        }
        added
    }
}
