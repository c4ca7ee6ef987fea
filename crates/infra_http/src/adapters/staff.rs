//! Staff endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{BulkOutcome, DomainPort, PortError, StaffId};
use domain_registry::ports::{BulkUploadFile, StaffPort};
use domain_registry::{
    CreateStaffRequest, Paginated, Pagination, Staff, StaffFilters, UpdateStaffRequest,
};

use crate::adapters::{Ack, BulkResultEnvelope};
use crate::client::HttpGateway;

/// `StaffPort` against the resource registry service
pub struct StaffGateway {
    gateway: Arc<HttpGateway>,
}

impl StaffGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().resources_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct StaffListEnvelope {
    staff: Vec<Staff>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct StaffEnvelope {
    staff: Staff,
}

impl DomainPort for StaffGateway {}

#[async_trait]
impl StaffPort for StaffGateway {
    async fn list_staff(&self, filters: &StaffFilters) -> Result<Paginated<Staff>, PortError> {
        let envelope: StaffListEnvelope = self
            .gateway
            .get_with_query(&self.url("staff"), filters)
            .await?;
        Ok(Paginated {
            items: envelope.staff,
            pagination: envelope.pagination,
        })
    }

    async fn get_staff(&self, id: StaffId) -> Result<Staff, PortError> {
        let envelope: StaffEnvelope = self
            .gateway
            .get(&self.url(&format!("staff/{}", id.as_uuid())))
            .await?;
        Ok(envelope.staff)
    }

    async fn create_staff(&self, request: &CreateStaffRequest) -> Result<Staff, PortError> {
        let envelope: StaffEnvelope = self.gateway.post(&self.url("staff"), request).await?;
        Ok(envelope.staff)
    }

    async fn update_staff(
        &self,
        id: StaffId,
        request: &UpdateStaffRequest,
    ) -> Result<Staff, PortError> {
        let envelope: StaffEnvelope = self
            .gateway
            .put(&self.url(&format!("staff/{}", id.as_uuid())), request)
            .await?;
        Ok(envelope.staff)
    }

    async fn delete_staff(&self, id: StaffId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("staff/{}", id.as_uuid())))
            .await?;
        Ok(())
    }

    async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, PortError> {
        let envelope: BulkResultEnvelope = self
            .gateway
            .post_file(
                &self.url("staff/bulk-upload"),
                file.file_name,
                file.content_type,
                file.bytes,
            )
            .await?;
        Ok(envelope.into_outcome())
    }
}
