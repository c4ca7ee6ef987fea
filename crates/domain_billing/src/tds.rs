//! TDS mappings and calculation
//!
//! TDS (Tax Deducted at Source) is the percentage a payer withholds from
//! disbursements to a provider. A mapping records the agreed percentage per
//! provider/payer pair; the calculation applies it to an amount and reports
//! the withheld and net figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Money, Rate, TdsMappingId};

use crate::error::BillingError;
use domain_registry::ResourceStatus;

/// A TDS withholding agreement between a provider and a payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsMapping {
    pub id: TdsMappingId,
    pub provider_name: String,
    pub payer_name: String,
    /// Withholding percentage, e.g. 10 for 10%
    pub tds_percentage: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ResourceStatus,
}

impl TdsMapping {
    /// The percentage as a rate ready to apply
    pub fn rate(&self) -> Rate {
        Rate::from_percentage(self.tds_percentage)
    }

    /// True if the mapping applies on `date`
    pub fn effective_on(&self, date: NaiveDate) -> bool {
        match self.effective_date {
            Some(effective) => date >= effective,
            None => true,
        }
    }
}

/// Filters accepted by the TDS mapping list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct TdsMappingFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Payload for creating a TDS mapping
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTdsMappingRequest {
    #[validate(length(min = 1, message = "Provider name is required"))]
    pub provider_name: String,
    #[validate(length(min = 1, message = "Payer name is required"))]
    pub payer_name: String,
    pub tds_percentage: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTdsMappingRequest {
    /// The percentage must sit in [0, 100]
    pub fn check_percentage(&self) -> Result<(), BillingError> {
        check_percentage(self.tds_percentage)
    }
}

/// Payload for updating a TDS mapping; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTdsMappingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

/// Result of applying a TDS mapping to a disbursement amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsCalculation {
    pub provider_name: String,
    pub payer_name: String,
    pub tds_percentage: Decimal,
    pub gross_amount: Money,
    pub tds_amount: Money,
    pub net_amount: Money,
}

/// Applies a mapping's withholding percentage to a gross amount
///
/// Both derived figures are rounded to the currency's standard places,
/// with the net computed from the rounded withholding so the two always
/// sum back to the gross.
pub fn calculate_tds(mapping: &TdsMapping, gross: Money) -> Result<TdsCalculation, BillingError> {
    check_percentage(mapping.tds_percentage)?;

    let tds_amount = mapping.rate().apply(&gross).round_to_currency();
    let net_amount = gross.checked_sub(&tds_amount)?;

    Ok(TdsCalculation {
        provider_name: mapping.provider_name.clone(),
        payer_name: mapping.payer_name.clone(),
        tds_percentage: mapping.tds_percentage,
        gross_amount: gross,
        tds_amount,
        net_amount,
    })
}

fn check_percentage(percentage: Decimal) -> Result<(), BillingError> {
    if percentage < Decimal::ZERO || percentage > dec!(100) {
        return Err(BillingError::InvalidPercentage(percentage));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn mapping(pct: Decimal) -> TdsMapping {
        TdsMapping {
            id: TdsMappingId::new(),
            provider_name: "City Hospital".to_string(),
            payer_name: "National Health Assurance".to_string(),
            tds_percentage: pct,
            effective_date: Some(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
            description: None,
            status: ResourceStatus::Active,
        }
    }

    #[test]
    fn test_calculate_tds() {
        let result = calculate_tds(&mapping(dec!(10)), Money::inr(dec!(50000))).unwrap();

        assert_eq!(result.tds_amount, Money::inr(dec!(5000)));
        assert_eq!(result.net_amount, Money::inr(dec!(45000)));
    }

    #[test]
    fn test_calculate_tds_rounds_to_paise() {
        let result = calculate_tds(&mapping(dec!(1.5)), Money::inr(dec!(333.33))).unwrap();

        // 1.5% of 333.33 = 4.99995, rounds to 5.00
        assert_eq!(result.tds_amount, Money::inr(dec!(5.00)));
        assert_eq!(result.net_amount, Money::inr(dec!(328.33)));
        assert_eq!(
            result.tds_amount.checked_add(&result.net_amount).unwrap(),
            result.gross_amount
        );
    }

    #[test]
    fn test_zero_percentage_withholds_nothing() {
        let result = calculate_tds(&mapping(dec!(0)), Money::inr(dec!(1000))).unwrap();
        assert!(result.tds_amount.is_zero());
        assert_eq!(result.net_amount, Money::inr(dec!(1000)));
    }

    #[test]
    fn test_out_of_range_percentage_rejected() {
        let err = calculate_tds(&mapping(dec!(101)), Money::inr(dec!(1000))).unwrap_err();
        assert!(matches!(err, BillingError::InvalidPercentage(_)));

        let err = calculate_tds(&mapping(dec!(-1)), Money::inr(dec!(1000))).unwrap_err();
        assert!(matches!(err, BillingError::InvalidPercentage(_)));
    }

    #[test]
    fn test_effective_on() {
        let m = mapping(dec!(10));
        assert!(m.effective_on(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
        assert!(m.effective_on(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
        assert!(!m.effective_on(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
    }

    #[test]
    fn test_request_percentage_bounds() {
        let request = CreateTdsMappingRequest {
            provider_name: "City Hospital".to_string(),
            payer_name: "National Health Assurance".to_string(),
            tds_percentage: dec!(100),
            effective_date: None,
            description: None,
        };
        assert!(request.check_percentage().is_ok());
    }

    #[test]
    fn test_rate_uses_other_currencies() {
        let result = calculate_tds(
            &mapping(dec!(10)),
            Money::new(dec!(100), Currency::USD),
        )
        .unwrap();
        assert_eq!(result.tds_amount, Money::new(dec!(10), Currency::USD));
    }
}
