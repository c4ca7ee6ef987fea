//! Signed-in user profile
//!
//! The backend returns the profile as JSON; it is parsed into this explicit
//! structure at the boundary rather than being passed around as a loose map.

use serde::{Deserialize, Serialize};

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Hospital administrator (direct email/password login)
    HospitalAdmin,
    /// Relationship manager
    RelationshipManager,
    /// Relationship partner
    RelationshipPartner,
    /// Corporate employee (phone + OTP login)
    Employee,
}

/// The entity a user acts on behalf of (hospital or corporate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: String,
    pub name: String,
}

/// Profile of the signed-in user as returned by the backend
///
/// `uid` is the backend's own identifier (not necessarily a UUID), so it
/// stays a plain string rather than a typed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_entity: Option<AssignedEntity>,
}

impl UserProfile {
    /// Display name, falling back through the fields the backend may fill
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.employee_name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }

    /// Builds an employee profile from an OTP verification response
    ///
    /// The OTP endpoint does not return a full profile, so the client
    /// assembles one from the fields it does return.
    pub fn employee(
        uid: impl Into<String>,
        employee_name: impl Into<String>,
        phone: impl Into<String>,
        corporate_name: impl Into<String>,
        dependents: Vec<String>,
    ) -> Self {
        let corporate_name = corporate_name.into();
        let entity_id = format!(
            "corporate_{}",
            corporate_name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
        );
        Self {
            uid: uid.into(),
            role: UserRole::Employee,
            name: None,
            email: None,
            phone: Some(phone.into()),
            employee_name: Some(employee_name.into()),
            corporate_name: Some(corporate_name.clone()),
            dependents,
            hospital_name: None,
            assigned_entity: Some(AssignedEntity {
                entity_type: "corporate".to_string(),
                id: entity_id,
                name: corporate_name,
            }),
        }
    }
}
