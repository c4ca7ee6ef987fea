//! Departments endpoints adapter

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use core_kernel::{DepartmentId, DomainPort, PortError};
use domain_registry::department::DepartmentFilters;
use domain_registry::ports::DepartmentsPort;
use domain_registry::{
    CreateDepartmentRequest, Department, Paginated, Pagination, UpdateDepartmentRequest,
};

use crate::adapters::Ack;
use crate::client::HttpGateway;

/// `DepartmentsPort` against the billing-side host that owns departments
pub struct DepartmentsGateway {
    gateway: Arc<HttpGateway>,
}

impl DepartmentsGateway {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.gateway.endpoints().billing_base, path)
    }
}

#[derive(Debug, Deserialize)]
struct DepartmentsEnvelope {
    departments: Vec<Department>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct DepartmentEnvelope {
    department: Department,
}

impl DomainPort for DepartmentsGateway {}

#[async_trait]
impl DepartmentsPort for DepartmentsGateway {
    async fn list_departments(
        &self,
        filters: &DepartmentFilters,
    ) -> Result<Paginated<Department>, PortError> {
        let envelope: DepartmentsEnvelope = self
            .gateway
            .get_with_query(&self.url("departments"), filters)
            .await?;
        Ok(Paginated {
            items: envelope.departments,
            pagination: envelope.pagination,
        })
    }

    async fn get_department(&self, id: DepartmentId) -> Result<Department, PortError> {
        let envelope: DepartmentEnvelope = self
            .gateway
            .get(&self.url(&format!("departments/{}", id.as_uuid())))
            .await?;
        Ok(envelope.department)
    }

    async fn create_department(
        &self,
        request: &CreateDepartmentRequest,
    ) -> Result<Department, PortError> {
        let envelope: DepartmentEnvelope =
            self.gateway.post(&self.url("departments"), request).await?;
        Ok(envelope.department)
    }

    async fn update_department(
        &self,
        id: DepartmentId,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, PortError> {
        let envelope: DepartmentEnvelope = self
            .gateway
            .put(&self.url(&format!("departments/{}", id.as_uuid())), request)
            .await?;
        Ok(envelope.department)
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<(), PortError> {
        let _: Ack = self
            .gateway
            .delete(&self.url(&format!("departments/{}", id.as_uuid())))
            .await?;
        Ok(())
    }
}
