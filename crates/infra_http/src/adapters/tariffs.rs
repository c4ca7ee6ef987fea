//! Tariff endpoints adapter
//!
//! List and lookup responses are memoized through the TTL cache; every
//! mutation drops the tariff keys so the next read refetches.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{BulkOutcome, DomainPort, LineItemId, PayerId, PortError, TariffId};
use domain_billing::ports::{TariffStatistics, TariffsPort};
use domain_billing::{
    CreateLineItemRequest, CreatePayerMappingRequest, CreateTariffRequest, PayerMapping, Tariff,
    TariffFilters, TariffLineItem, UpdateTariffRequest,
};
use domain_registry::ports::BulkUploadFile;
use domain_registry::{Paginated, Pagination, Payer, PayerType};

use crate::adapters::{Ack, BulkResultEnvelope};
use crate::cache::TtlCache;
use crate::client::HttpGateway;

const CACHE_PREFIX: &str = "tariffs-";

/// `TariffsPort` against the billing service
pub struct TariffsGateway {
    gateway: Arc<HttpGateway>,
    cache: Arc<TtlCache>,
}

impl TariffsGateway {
    pub fn new(gateway: Arc<HttpGateway>, cache: Arc<TtlCache>) -> Self {
        Self { gateway, cache }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().billing_base, path)
    }

    fn invalidate(&self) {
        self.cache.invalidate_prefix(CACHE_PREFIX);
    }
}

#[derive(Debug, Deserialize)]
struct TariffsEnvelope {
    tariffs: Vec<Tariff>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct TariffEnvelope {
    tariff: Tariff,
}

#[derive(Debug, Deserialize)]
struct LineItemEnvelope {
    line_item: TariffLineItem,
}

#[derive(Debug, Deserialize)]
struct PayerMappingEnvelope {
    payer_mapping: PayerMapping,
}

#[derive(Debug, Deserialize)]
struct AvailablePayersEnvelope {
    payers: Vec<Payer>,
}

#[derive(Debug, Deserialize)]
struct PayerTypesEnvelope {
    payer_types: Vec<PayerType>,
}

impl DomainPort for TariffsGateway {}

#[async_trait]
impl TariffsPort for TariffsGateway {
    async fn list_tariffs(&self, filters: &TariffFilters) -> Result<Paginated<Tariff>, PortError> {
        let cache_key = format!(
            "{CACHE_PREFIX}list-{}",
            serde_json::to_string(filters).unwrap_or_default()
        );
        if let Some(cached) = self.cache.get::<Paginated<Tariff>>(&cache_key) {
            tracing::debug!(key = %cache_key, "tariff list served from cache");
            return Ok(cached);
        }

        let envelope: TariffsEnvelope = self
            .gateway
            .get_with_query(&self.url("tariffs"), filters)
            .await?;
        let page = Paginated {
            items: envelope.tariffs,
            pagination: envelope.pagination,
        };
        self.cache.set(&cache_key, &page);
        Ok(page)
    }

    async fn get_tariff(&self, id: TariffId) -> Result<Tariff, PortError> {
        let envelope: TariffEnvelope = self
            .gateway
            .get(&self.url(&format!("tariffs/{}", id.as_uuid())))
            .await?;
        Ok(envelope.tariff)
    }

    async fn create_tariff(&self, request: &CreateTariffRequest) -> Result<Tariff, PortError> {
        let envelope: TariffEnvelope = self.gateway.post(&self.url("tariffs"), request).await?;
        self.invalidate();
        Ok(envelope.tariff)
    }

    async fn update_tariff(
        &self,
        id: TariffId,
        request: &UpdateTariffRequest,
    ) -> Result<Tariff, PortError> {
        let envelope: TariffEnvelope = self
            .gateway
            .put(&self.url(&format!("tariffs/{}", id.as_uuid())), request)
            .await?;
        self.invalidate();
        Ok(envelope.tariff)
    }

    async fn delete_tariff(&self, id: TariffId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("tariffs/{}", id.as_uuid())))
            .await?;
        self.invalidate();
        Ok(())
    }

    async fn add_line_item(
        &self,
        tariff_id: TariffId,
        request: &CreateLineItemRequest,
    ) -> Result<TariffLineItem, PortError> {
        let envelope: LineItemEnvelope = self
            .gateway
            .post(
                &self.url(&format!("tariffs/{}/line-items", tariff_id.as_uuid())),
                request,
            )
            .await?;
        self.invalidate();
        Ok(envelope.line_item)
    }

    async fn update_line_item(
        &self,
        tariff_id: TariffId,
        line_item_id: LineItemId,
        request: &CreateLineItemRequest,
    ) -> Result<TariffLineItem, PortError> {
        let envelope: LineItemEnvelope = self
            .gateway
            .put(
                &self.url(&format!(
                    "tariffs/{}/line-items/{}",
                    tariff_id.as_uuid(),
                    line_item_id.as_uuid()
                )),
                request,
            )
            .await?;
        self.invalidate();
        Ok(envelope.line_item)
    }

    async fn delete_line_item(
        &self,
        tariff_id: TariffId,
        line_item_id: LineItemId,
    ) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!(
                "tariffs/{}/line-items/{}",
                tariff_id.as_uuid(),
                line_item_id.as_uuid()
            )))
            .await?;
        self.invalidate();
        Ok(())
    }

    async fn bulk_upload_line_items(
        &self,
        file: BulkUploadFile,
    ) -> Result<BulkOutcome<String>, PortError> {
        let envelope: BulkResultEnvelope = self
            .gateway
            .post_file(
                &self.url("tariffs/bulk-upload"),
                file.file_name,
                file.content_type,
                file.bytes,
            )
            .await?;
        self.invalidate();
        Ok(envelope.into_outcome())
    }

    async fn add_payer_mapping(
        &self,
        tariff_id: TariffId,
        request: &CreatePayerMappingRequest,
    ) -> Result<PayerMapping, PortError> {
        let envelope: PayerMappingEnvelope = self
            .gateway
            .post(
                &self.url(&format!("tariffs/{}/payers", tariff_id.as_uuid())),
                request,
            )
            .await?;
        self.invalidate();
        Ok(envelope.payer_mapping)
    }

    async fn bulk_add_payer_mappings(
        &self,
        tariff_id: TariffId,
        requests: &[CreatePayerMappingRequest],
    ) -> Result<BulkOutcome<String>, PortError> {
        let envelope: BulkResultEnvelope = self
            .gateway
            .post(
                &self.url(&format!(
                    "tariffs/{}/payers/bulk-with-relationships",
                    tariff_id.as_uuid()
                )),
                &serde_json::json!({ "payer_mappings": requests }),
            )
            .await?;
        self.invalidate();
        Ok(envelope.into_outcome())
    }

    async fn delete_payer_mapping(
        &self,
        tariff_id: TariffId,
        payer_id: PayerId,
    ) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!(
                "tariffs/{}/payers/{}",
                tariff_id.as_uuid(),
                payer_id.as_uuid()
            )))
            .await?;
        self.invalidate();
        Ok(())
    }

    async fn available_payers(&self) -> Result<Vec<Payer>, PortError> {
        let cache_key = format!("{CACHE_PREFIX}available-payers");
        if let Some(cached) = self.cache.get::<Vec<Payer>>(&cache_key) {
            return Ok(cached);
        }

        let envelope: AvailablePayersEnvelope = self
            .gateway
            .get(&self.url("tariffs/available-payers"))
            .await?;
        self.cache.set(&cache_key, &envelope.payers);
        Ok(envelope.payers)
    }

    async fn payer_types(&self) -> Result<Vec<PayerType>, PortError> {
        let cache_key = format!("{CACHE_PREFIX}payer-types");
        if let Some(cached) = self.cache.get::<Vec<PayerType>>(&cache_key) {
            return Ok(cached);
        }

        let envelope: PayerTypesEnvelope = self
            .gateway
            .get(&self.url("tariffs/payer-types"))
            .await?;
        self.cache.set(&cache_key, &envelope.payer_types);
        Ok(envelope.payer_types)
    }

    async fn statistics(&self) -> Result<TariffStatistics, PortError> {
        self.gateway.get(&self.url("tariffs/stats")).await
    }
}
