//! Resource list services
//!
//! Thin orchestration over the registry ports: validate the request, call
//! the backend, fan bulk deletes out as independent requests. The screens
//! re-read the list after any bulk operation to reconcile partial results.

use std::sync::Arc;

use validator::Validate;

use core_kernel::{BulkOutcome, DoctorId, StaffId};
use domain_registry::ports::{BulkUploadFile, DoctorsPort, StaffPort};
use domain_registry::{
    CreateDoctorRequest, CreateStaffRequest, Doctor, DoctorFilters, Paginated, Staff,
    StaffFilters, UpdateDoctorRequest, UpdateStaffRequest,
};

use crate::bulk::aggregate_bulk;
use crate::error::AppError;

/// Drives the doctors table and form
pub struct DoctorsService {
    port: Arc<dyn DoctorsPort>,
}

impl DoctorsService {
    pub fn new(port: Arc<dyn DoctorsPort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, filters: &DoctorFilters) -> Result<Paginated<Doctor>, AppError> {
        Ok(self.port.list_doctors(filters).await?)
    }

    pub async fn get(&self, id: DoctorId) -> Result<Doctor, AppError> {
        Ok(self.port.get_doctor(id).await?)
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, AppError> {
        request.validate()?;
        Ok(self.port.create_doctor(&request).await?)
    }

    pub async fn update(
        &self,
        id: DoctorId,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, AppError> {
        request.validate()?;
        Ok(self.port.update_doctor(id, &request).await?)
    }

    pub async fn delete(&self, id: DoctorId) -> Result<(), AppError> {
        Ok(self.port.delete_doctor(id).await?)
    }

    /// Deletes the selected rows as concurrent independent requests
    pub async fn delete_many(&self, ids: Vec<DoctorId>) -> BulkOutcome<DoctorId> {
        let port = self.port.clone();
        let outcome = aggregate_bulk(ids, move |id| {
            let port = port.clone();
            async move { port.delete_doctor(id).await }
        })
        .await;

        if outcome.is_partial() {
            tracing::warn!(
                succeeded = outcome.succeeded.len(),
                failed = outcome.failed.len(),
                "bulk doctor delete left mixed state; list should be re-read"
            );
        }
        outcome
    }

    pub async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, AppError> {
        Ok(self.port.bulk_upload(file).await?)
    }

    pub async fn available_departments(&self) -> Result<Vec<String>, AppError> {
        Ok(self.port.available_departments().await?)
    }
}

/// Drives the staff table and form
pub struct StaffService {
    port: Arc<dyn StaffPort>,
}

impl StaffService {
    pub fn new(port: Arc<dyn StaffPort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, filters: &StaffFilters) -> Result<Paginated<Staff>, AppError> {
        Ok(self.port.list_staff(filters).await?)
    }

    pub async fn get(&self, id: StaffId) -> Result<Staff, AppError> {
        Ok(self.port.get_staff(id).await?)
    }

    pub async fn create(&self, request: CreateStaffRequest) -> Result<Staff, AppError> {
        request.validate()?;
        Ok(self.port.create_staff(&request).await?)
    }

    pub async fn update(
        &self,
        id: StaffId,
        request: UpdateStaffRequest,
    ) -> Result<Staff, AppError> {
        request.validate()?;
        Ok(self.port.update_staff(id, &request).await?)
    }

    pub async fn delete(&self, id: StaffId) -> Result<(), AppError> {
        Ok(self.port.delete_staff(id).await?)
    }

    /// Deletes the selected rows as concurrent independent requests
    pub async fn delete_many(&self, ids: Vec<StaffId>) -> BulkOutcome<StaffId> {
        let port = self.port.clone();
        aggregate_bulk(ids, move |id| {
            let port = port.clone();
            async move { port.delete_staff(id).await }
        })
        .await
    }

    pub async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, AppError> {
        Ok(self.port.bulk_upload(file).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{DomainPort, PortError};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Doctors port that fails deletes for a configured set of ids
    #[derive(Default)]
    struct FlakyDoctorsPort {
        calls: AtomicUsize,
        failing: Mutex<HashSet<DoctorId>>,
    }

    impl DomainPort for FlakyDoctorsPort {}

    #[async_trait]
    impl DoctorsPort for FlakyDoctorsPort {
        async fn list_doctors(
            &self,
            _filters: &DoctorFilters,
        ) -> Result<Paginated<Doctor>, PortError> {
            Ok(Paginated::single_page(Vec::new()))
        }

        async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, PortError> {
            Err(PortError::not_found("Doctor", id))
        }

        async fn create_doctor(
            &self,
            _request: &CreateDoctorRequest,
        ) -> Result<Doctor, PortError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(PortError::internal("not under test"))
        }

        async fn update_doctor(
            &self,
            id: DoctorId,
            _request: &UpdateDoctorRequest,
        ) -> Result<Doctor, PortError> {
            Err(PortError::not_found("Doctor", id))
        }

        async fn delete_doctor(&self, id: DoctorId) -> Result<(), PortError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.lock().unwrap().contains(&id) {
                Err(PortError::conflict("doctor has scheduled appointments"))
            } else {
                Ok(())
            }
        }

        async fn bulk_upload(
            &self,
            _file: BulkUploadFile,
        ) -> Result<BulkOutcome<String>, PortError> {
            Ok(BulkOutcome::new())
        }

        async fn available_departments(&self) -> Result<Vec<String>, PortError> {
            Ok(vec!["Cardiac Sciences".to_string()])
        }
    }

    #[tokio::test]
    async fn test_bulk_delete_aggregates_partial_failure() {
        let port = Arc::new(FlakyDoctorsPort::default());
        let keep = DoctorId::new();
        let gone_a = DoctorId::new();
        let gone_b = DoctorId::new();
        port.failing.lock().unwrap().insert(keep);

        let service = DoctorsService::new(port.clone());
        let outcome = service.delete_many(vec![keep, gone_a, gone_b]).await;

        assert_eq!(port.calls.load(Ordering::SeqCst), 3);
        assert!(outcome.is_partial());
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].item, keep);
        assert!(outcome.failed[0].error.contains("scheduled appointments"));
    }

    #[tokio::test]
    async fn test_invalid_create_blocked_before_dispatch() {
        let port = Arc::new(FlakyDoctorsPort::default());
        let service = DoctorsService::new(port.clone());

        let request = CreateDoctorRequest {
            doctor_name: String::new(),
            specialty_name: "Cardiology".to_string(),
            department_name: "Cardiac Sciences".to_string(),
            qualification: None,
            experience_years: None,
            consultation_fee: None,
            contact_number: None,
            email: None,
            availability: None,
        };

        let err = service.create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(port.calls.load(Ordering::SeqCst), 0);
    }
}
