//! Ward lookup adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{DomainPort, PortError};
use domain_registry::ports::WardsPort;
use domain_registry::Ward;

use crate::client::HttpGateway;

/// `WardsPort` against the resource registry service
pub struct WardsGateway {
    gateway: Arc<HttpGateway>,
}

impl WardsGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct WardsEnvelope {
    wards: Vec<Ward>,
}

impl DomainPort for WardsGateway {}

#[async_trait]
impl WardsPort for WardsGateway {
    async fn list_wards(&self) -> Result<Vec<Ward>, PortError> {
        let url = format!("{}/wards", self.gateway.endpoints().resources_base);
        let envelope: WardsEnvelope = self.gateway.get(&url).await?;
        Ok(envelope.wards)
    }
}
