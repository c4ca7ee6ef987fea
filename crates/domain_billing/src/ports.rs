//! Billing Domain Ports
//!
//! What the tariff and TDS screens need from the backend. Implemented by
//! the HTTP gateway; mocked in tests.

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{BulkOutcome, DomainPort, LineItemId, Money, PayerId, PortError, TariffId, TdsMappingId};

use domain_registry::{Paginated, Payer, PayerType};
use domain_registry::ports::BulkUploadFile;

use crate::tariff::{
    CreateLineItemRequest, CreatePayerMappingRequest, CreateTariffRequest, PayerMapping, Tariff,
    TariffFilters, TariffLineItem, UpdateTariffRequest,
};
use crate::tds::{
    CreateTdsMappingRequest, TdsCalculation, TdsMapping, TdsMappingFilters,
    UpdateTdsMappingRequest,
};

/// Aggregate tariff counts for the dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TariffStatistics {
    pub total_tariffs: u64,
    pub active_tariffs: u64,
    pub total_line_items: u64,
    pub mapped_payers: u64,
}

/// Backend operations behind the tariff screens
#[async_trait]
pub trait TariffsPort: DomainPort {
    async fn list_tariffs(&self, filters: &TariffFilters) -> Result<Paginated<Tariff>, PortError>;

    async fn get_tariff(&self, id: TariffId) -> Result<Tariff, PortError>;

    async fn create_tariff(&self, request: &CreateTariffRequest) -> Result<Tariff, PortError>;

    async fn update_tariff(
        &self,
        id: TariffId,
        request: &UpdateTariffRequest,
    ) -> Result<Tariff, PortError>;

    async fn delete_tariff(&self, id: TariffId) -> Result<(), PortError>;

    // Line items

    async fn add_line_item(
        &self,
        tariff_id: TariffId,
        request: &CreateLineItemRequest,
    ) -> Result<TariffLineItem, PortError>;

    async fn update_line_item(
        &self,
        tariff_id: TariffId,
        line_item_id: LineItemId,
        request: &CreateLineItemRequest,
    ) -> Result<TariffLineItem, PortError>;

    async fn delete_line_item(
        &self,
        tariff_id: TariffId,
        line_item_id: LineItemId,
    ) -> Result<(), PortError>;

    /// Uploads a line-items file for server-side bulk creation
    async fn bulk_upload_line_items(
        &self,
        file: BulkUploadFile,
    ) -> Result<BulkOutcome<String>, PortError>;

    // Payer mappings

    async fn add_payer_mapping(
        &self,
        tariff_id: TariffId,
        request: &CreatePayerMappingRequest,
    ) -> Result<PayerMapping, PortError>;

    /// Maps many payers in one backend call, relationships included
    async fn bulk_add_payer_mappings(
        &self,
        tariff_id: TariffId,
        requests: &[CreatePayerMappingRequest],
    ) -> Result<BulkOutcome<String>, PortError>;

    async fn delete_payer_mapping(
        &self,
        tariff_id: TariffId,
        payer_id: PayerId,
    ) -> Result<(), PortError>;

    // Lookups

    async fn available_payers(&self) -> Result<Vec<Payer>, PortError>;

    async fn payer_types(&self) -> Result<Vec<PayerType>, PortError>;

    async fn statistics(&self) -> Result<TariffStatistics, PortError>;
}

/// Backend operations behind the TDS mapping screens
#[async_trait]
pub trait TdsPort: DomainPort {
    async fn list_mappings(
        &self,
        filters: &TdsMappingFilters,
    ) -> Result<Paginated<TdsMapping>, PortError>;

    async fn get_mapping(&self, id: TdsMappingId) -> Result<TdsMapping, PortError>;

    async fn create_mapping(
        &self,
        request: &CreateTdsMappingRequest,
    ) -> Result<TdsMapping, PortError>;

    async fn update_mapping(
        &self,
        id: TdsMappingId,
        request: &UpdateTdsMappingRequest,
    ) -> Result<TdsMapping, PortError>;

    async fn delete_mapping(&self, id: TdsMappingId) -> Result<(), PortError>;

    /// Asks the backend to apply the mapped percentage to an amount
    async fn calculate(
        &self,
        provider_name: &str,
        payer_name: &str,
        amount: Money,
    ) -> Result<TdsCalculation, PortError>;

    /// Payer names that have TDS mappings
    async fn payer_names(&self) -> Result<Vec<String>, PortError>;

    /// Provider names that have TDS mappings
    async fn provider_names(&self) -> Result<Vec<String>, PortError>;
}
