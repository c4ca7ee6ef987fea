//! Pre-built test data for common entities

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use auth_session::{UserProfile, UserRole};
use core_kernel::{HospitalId, LineItemId, TariffId};
use domain_billing::{Tariff, TariffLineItem};
use domain_registry::ResourceStatus;

/// A hospital admin profile like the login endpoint returns
pub fn admin_profile() -> UserProfile {
    UserProfile {
        uid: "admin-001".to_string(),
        role: UserRole::HospitalAdmin,
        name: Some("Admin User".to_string()),
        email: Some("admin@hospital.example".to_string()),
        phone: None,
        employee_name: None,
        corporate_name: None,
        dependents: vec![],
        hospital_name: Some("City Hospital".to_string()),
        assigned_entity: None,
    }
}

/// An employee profile as built from an OTP verification
pub fn employee_profile() -> UserProfile {
    UserProfile::employee(
        "emp-001",
        "Asha Rao",
        "+919876543210",
        "Acme Industries",
        vec!["SPOUSE".to_string(), "SON".to_string()],
    )
}

/// A one-year tariff with a couple of room line items
pub fn standard_tariff() -> Tariff {
    Tariff {
        id: TariffId::new(),
        tariff_name: "CGHS 2026".to_string(),
        tariff_start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        tariff_end_date: Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        document_name: None,
        hospital_id: HospitalId::new(),
        line_items: vec![
            TariffLineItem {
                id: LineItemId::new(),
                code: "RM-101".to_string(),
                line_item: "General ward per day".to_string(),
                amount: dec!(2500),
                description: None,
            },
            TariffLineItem {
                id: LineItemId::new(),
                code: "RM-201".to_string(),
                line_item: "ICU per day".to_string(),
                amount: dec!(9000),
                description: Some("Includes monitoring".to_string()),
            },
        ],
        payer_mappings: Vec::new(),
        status: ResourceStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_internally_consistent() {
        let tariff = standard_tariff();
        assert!(tariff.in_force_on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
        assert!(tariff.line_item_by_code("RM-201").is_some());

        assert_eq!(admin_profile().role, UserRole::HospitalAdmin);
        assert_eq!(employee_profile().dependents.len(), 2);
    }
}
