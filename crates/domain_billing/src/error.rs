//! Billing domain errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Tariff not found: {0}")]
    TariffNotFound(String),

    #[error("Tariff end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Duplicate line item code: {0}")]
    DuplicateLineItemCode(String),

    #[error("Negative amount on line item: {0}")]
    NegativeAmount(String),

    #[error("Payer already mapped to this tariff: {0}")]
    DuplicatePayerMapping(String),

    #[error("Payer mapping not found: {0}")]
    PayerMappingNotFound(String),

    #[error("TDS percentage out of range: {0}")]
    InvalidPercentage(Decimal),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
