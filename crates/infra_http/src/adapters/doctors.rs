//! Doctors endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{BulkOutcome, DoctorId, DomainPort, PortError};
use domain_registry::ports::{BulkUploadFile, DoctorsPort};
use domain_registry::{
    CreateDoctorRequest, Doctor, DoctorFilters, Paginated, Pagination, UpdateDoctorRequest,
};

use crate::adapters::{Ack, BulkResultEnvelope};
use crate::client::HttpGateway;

/// `DoctorsPort` against the resource registry service
pub struct DoctorsGateway {
    gateway: Arc<HttpGateway>,
}

impl DoctorsGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().resources_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct DoctorsEnvelope {
    doctors: Vec<Doctor>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct DoctorEnvelope {
    doctor: Doctor,
}

#[derive(Debug, Deserialize)]
struct DepartmentNamesEnvelope {
    departments: Vec<String>,
}

impl DomainPort for DoctorsGateway {}

#[async_trait]
impl DoctorsPort for DoctorsGateway {
    async fn list_doctors(&self, filters: &DoctorFilters) -> Result<Paginated<Doctor>, PortError> {
        let envelope: DoctorsEnvelope = self
            .gateway
            .get_with_query(&self.url("doctors"), filters)
            .await?;
        Ok(Paginated {
            items: envelope.doctors,
            pagination: envelope.pagination,
        })
    }

    async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, PortError> {
        let envelope: DoctorEnvelope = self
            .gateway
            .get(&self.url(&format!("doctors/{}", id.as_uuid())))
            .await?;
        Ok(envelope.doctor)
    }

    async fn create_doctor(&self, request: &CreateDoctorRequest) -> Result<Doctor, PortError> {
        let envelope: DoctorEnvelope = self.gateway.post(&self.url("doctors"), request).await?;
        Ok(envelope.doctor)
    }

    async fn update_doctor(
        &self,
        id: DoctorId,
        request: &UpdateDoctorRequest,
    ) -> Result<Doctor, PortError> {
        let envelope: DoctorEnvelope = self
            .gateway
            .put(&self.url(&format!("doctors/{}", id.as_uuid())), request)
            .await?;
        Ok(envelope.doctor)
    }

    async fn delete_doctor(&self, id: DoctorId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("doctors/{}", id.as_uuid())))
            .await?;
        Ok(())
    }

    async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, PortError> {
        let envelope: BulkResultEnvelope = self
            .gateway
            .post_file(
                &self.url("doctors/bulk-upload"),
                file.file_name,
                file.content_type,
                file.bytes,
            )
            .await?;
        Ok(envelope.into_outcome())
    }

    async fn available_departments(&self) -> Result<Vec<String>, PortError> {
        let envelope: DepartmentNamesEnvelope = self
            .gateway
            .get(&self.url("doctors/available-departments"))
            .await?;
        Ok(envelope.departments)
    }
}
