//! Billing Domain
//!
//! Tariffs (priced catalogues of billable line items, optionally mapped to
//! payers) and TDS mappings (the withholding percentage agreed between a
//! provider and a payer). The TDS calculation is the one piece of
//! arithmetic here; everything else is typed catalogue state.

pub mod error;
pub mod ports;
pub mod tariff;
pub mod tds;

pub use error::BillingError;
pub use ports::{TariffStatistics, TariffsPort, TdsPort};
pub use tariff::{
    AffiliatedInsurer, CreateLineItemRequest, CreatePayerMappingRequest, CreateTariffRequest,
    PayerMapping, Tariff, TariffFilters, TariffLineItem, UpdateTariffRequest,
};
pub use tds::{
    calculate_tds, CreateTdsMappingRequest, TdsCalculation, TdsMapping, TdsMappingFilters,
    UpdateTdsMappingRequest,
};
