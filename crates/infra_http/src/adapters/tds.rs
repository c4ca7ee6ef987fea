//! TDS mapping endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use core_kernel::{DomainPort, Money, PortError, TdsMappingId};
use domain_billing::ports::TdsPort;
use domain_billing::{
    CreateTdsMappingRequest, TdsCalculation, TdsMapping, TdsMappingFilters,
    UpdateTdsMappingRequest,
};
use domain_registry::{Paginated, Pagination};

use crate::adapters::Ack;
use crate::client::HttpGateway;

/// `TdsPort` against the billing service
pub struct TdsGateway {
    gateway: Arc<HttpGateway>,
}

impl TdsGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().billing_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct TdsMappingsEnvelope {
    tds_mappings: Vec<TdsMapping>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct TdsMappingEnvelope {
    tds_mapping: TdsMapping,
}

/// Wire shape of the backend's TDS calculation answer
#[derive(Debug, Deserialize)]
struct TdsCalculationEnvelope {
    provider_name: String,
    payer_name: String,
    tds_percentage: Decimal,
    gross_amount: Decimal,
    tds_amount: Decimal,
    net_amount: Decimal,
}

#[derive(Debug, Deserialize)]
struct NamesEnvelope {
    names: Vec<String>,
}

impl DomainPort for TdsGateway {}

#[async_trait]
impl TdsPort for TdsGateway {
    async fn list_mappings(
        &self,
        filters: &TdsMappingFilters,
    ) -> Result<Paginated<TdsMapping>, PortError> {
        let envelope: TdsMappingsEnvelope = self
            .gateway
            .get_with_query(&self.url("tds-mapping"), filters)
            .await?;
        Ok(Paginated {
            items: envelope.tds_mappings,
            pagination: envelope.pagination,
        })
    }

    async fn get_mapping(&self, id: TdsMappingId) -> Result<TdsMapping, PortError> {
        let envelope: TdsMappingEnvelope = self
            .gateway
            .get(&self.url(&format!("tds-mapping/{}", id.as_uuid())))
            .await?;
        Ok(envelope.tds_mapping)
    }

    async fn create_mapping(
        &self,
        request: &CreateTdsMappingRequest,
    ) -> Result<TdsMapping, PortError> {
        request
            .check_percentage()
            .map_err(|e| PortError::validation(e.to_string()))?;
        let envelope: TdsMappingEnvelope =
            self.gateway.post(&self.url("tds-mapping"), request).await?;
        Ok(envelope.tds_mapping)
    }

    async fn update_mapping(
        &self,
        id: TdsMappingId,
        request: &UpdateTdsMappingRequest,
    ) -> Result<TdsMapping, PortError> {
        let envelope: TdsMappingEnvelope = self
            .gateway
            .put(&self.url(&format!("tds-mapping/{}", id.as_uuid())), request)
            .await?;
        Ok(envelope.tds_mapping)
    }

    async fn delete_mapping(&self, id: TdsMappingId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("tds-mapping/{}", id.as_uuid())))
            .await?;
        Ok(())
    }

    async fn calculate(
        &self,
        provider_name: &str,
        payer_name: &str,
        amount: Money,
    ) -> Result<TdsCalculation, PortError> {
        let envelope: TdsCalculationEnvelope = self
            .gateway
            .post(
                &self.url("calculate-tds"),
                &json!({
                    "provider_name": provider_name,
                    "payer_name": payer_name,
                    "amount": amount.amount(),
                }),
            )
            .await?;

        let currency = amount.currency();
        Ok(TdsCalculation {
            provider_name: envelope.provider_name,
            payer_name: envelope.payer_name,
            tds_percentage: envelope.tds_percentage,
            gross_amount: Money::new(envelope.gross_amount, currency),
            tds_amount: Money::new(envelope.tds_amount, currency),
            net_amount: Money::new(envelope.net_amount, currency),
        })
    }

    async fn payer_names(&self) -> Result<Vec<String>, PortError> {
        let envelope: NamesEnvelope = self.gateway.get(&self.url("payers/names")).await?;
        Ok(envelope.names)
    }

    async fn provider_names(&self) -> Result<Vec<String>, PortError> {
        let envelope: NamesEnvelope = self.gateway.get(&self.url("providers/names")).await?;
        Ok(envelope.names)
    }
}
