//! Tariff and TDS services

use std::sync::Arc;

use validator::Validate;

use core_kernel::{Money, PayerId, TariffId, TdsMappingId};
use domain_billing::ports::{TariffsPort, TdsPort};
use domain_billing::{
    CreatePayerMappingRequest, CreateTariffRequest, CreateTdsMappingRequest, Tariff,
    TariffFilters, TdsCalculation, TdsMapping, TdsMappingFilters, UpdateTdsMappingRequest,
};
use domain_registry::Paginated;

use crate::error::AppError;

/// Drives the tariff management screens
pub struct TariffService {
    port: Arc<dyn TariffsPort>,
}

impl TariffService {
    pub fn new(port: Arc<dyn TariffsPort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, filters: &TariffFilters) -> Result<Paginated<Tariff>, AppError> {
        Ok(self.port.list_tariffs(filters).await?)
    }

    pub async fn get(&self, id: TariffId) -> Result<Tariff, AppError> {
        Ok(self.port.get_tariff(id).await?)
    }

    /// Creates a tariff after the client-side consistency checks
    pub async fn create(&self, request: CreateTariffRequest) -> Result<Tariff, AppError> {
        request.validate()?;
        request
            .check_consistency()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(self.port.create_tariff(&request).await?)
    }

    pub async fn delete(&self, id: TariffId) -> Result<(), AppError> {
        Ok(self.port.delete_tariff(id).await?)
    }

    /// Maps a selection of payers onto a tariff in one call
    pub async fn map_payers(
        &self,
        tariff_id: TariffId,
        payer_ids: Vec<PayerId>,
    ) -> Result<core_kernel::BulkOutcome<String>, AppError> {
        if payer_ids.is_empty() {
            return Err(AppError::validation("No payers selected"));
        }
        let requests: Vec<CreatePayerMappingRequest> = payer_ids
            .into_iter()
            .map(|payer_id| CreatePayerMappingRequest {
                payer_id,
                affiliated_insurance_company_ids: Vec::new(),
            })
            .collect();
        Ok(self.port.bulk_add_payer_mappings(tariff_id, &requests).await?)
    }
}

/// Drives the TDS mapping screens
pub struct TdsService {
    port: Arc<dyn TdsPort>,
}

impl TdsService {
    pub fn new(port: Arc<dyn TdsPort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, filters: &TdsMappingFilters) -> Result<Paginated<TdsMapping>, AppError> {
        Ok(self.port.list_mappings(filters).await?)
    }

    /// Creates a mapping; the percentage bound is checked before dispatch
    pub async fn create(&self, request: CreateTdsMappingRequest) -> Result<TdsMapping, AppError> {
        request.validate()?;
        request
            .check_percentage()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(self.port.create_mapping(&request).await?)
    }

    pub async fn update(
        &self,
        id: TdsMappingId,
        request: UpdateTdsMappingRequest,
    ) -> Result<TdsMapping, AppError> {
        Ok(self.port.update_mapping(id, &request).await?)
    }

    pub async fn delete(&self, id: TdsMappingId) -> Result<(), AppError> {
        Ok(self.port.delete_mapping(id).await?)
    }

    /// Asks the backend what a payer would withhold from `amount`
    pub async fn calculate(
        &self,
        provider_name: &str,
        payer_name: &str,
        amount: Money,
    ) -> Result<TdsCalculation, AppError> {
        Ok(self.port.calculate(provider_name, payer_name, amount).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use core_kernel::{BulkOutcome, DomainPort, LineItemId, PortError};
    use domain_billing::ports::TariffStatistics;
    use domain_billing::{
        CreateLineItemRequest, PayerMapping, TariffLineItem, UpdateTariffRequest,
    };
    use domain_registry::ports::BulkUploadFile;
    use domain_registry::{Payer, PayerType};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTariffsPort {
        creates: AtomicUsize,
    }

    impl DomainPort for CountingTariffsPort {}

    #[async_trait]
    impl TariffsPort for CountingTariffsPort {
        async fn list_tariffs(
            &self,
            _filters: &TariffFilters,
        ) -> Result<Paginated<Tariff>, PortError> {
            Ok(Paginated::single_page(Vec::new()))
        }

        async fn get_tariff(&self, id: TariffId) -> Result<Tariff, PortError> {
            Err(PortError::not_found("Tariff", id))
        }

        async fn create_tariff(&self, _request: &CreateTariffRequest) -> Result<Tariff, PortError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Err(PortError::internal("not under test"))
        }

        async fn update_tariff(
            &self,
            id: TariffId,
            _request: &UpdateTariffRequest,
        ) -> Result<Tariff, PortError> {
            Err(PortError::not_found("Tariff", id))
        }

        async fn delete_tariff(&self, _id: TariffId) -> Result<(), PortError> {
            Ok(())
        }

        async fn add_line_item(
            &self,
            _tariff_id: TariffId,
            _request: &CreateLineItemRequest,
        ) -> Result<TariffLineItem, PortError> {
            Err(PortError::internal("not under test"))
        }

        async fn update_line_item(
            &self,
            _tariff_id: TariffId,
            _line_item_id: LineItemId,
            _request: &CreateLineItemRequest,
        ) -> Result<TariffLineItem, PortError> {
            Err(PortError::internal("not under test"))
        }

        async fn delete_line_item(
            &self,
            _tariff_id: TariffId,
            _line_item_id: LineItemId,
        ) -> Result<(), PortError> {
            Ok(())
        }

        async fn bulk_upload_line_items(
            &self,
            _file: BulkUploadFile,
        ) -> Result<BulkOutcome<String>, PortError> {
            Ok(BulkOutcome::new())
        }

        async fn add_payer_mapping(
            &self,
            _tariff_id: TariffId,
            _request: &CreatePayerMappingRequest,
        ) -> Result<PayerMapping, PortError> {
            Err(PortError::internal("not under test"))
        }

        async fn bulk_add_payer_mappings(
            &self,
            _tariff_id: TariffId,
            requests: &[CreatePayerMappingRequest],
        ) -> Result<BulkOutcome<String>, PortError> {
            let mut outcome = BulkOutcome::new();
            for request in requests {
                outcome.record_success(request.payer_id.to_string());
            }
            Ok(outcome)
        }

        async fn delete_payer_mapping(
            &self,
            _tariff_id: TariffId,
            _payer_id: PayerId,
        ) -> Result<(), PortError> {
            Ok(())
        }

        async fn available_payers(&self) -> Result<Vec<Payer>, PortError> {
            Ok(Vec::new())
        }

        async fn payer_types(&self) -> Result<Vec<PayerType>, PortError> {
            Ok(vec![PayerType::Tpa, PayerType::InsuranceCompany])
        }

        async fn statistics(&self) -> Result<TariffStatistics, PortError> {
            Ok(TariffStatistics::default())
        }
    }

    #[tokio::test]
    async fn test_inconsistent_tariff_blocked_before_dispatch() {
        let port = Arc::new(CountingTariffsPort::default());
        let service = TariffService::new(port.clone());

        let request = CreateTariffRequest {
            tariff_name: "Backwards".to_string(),
            tariff_start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            tariff_end_date: Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            document_name: None,
            line_items: vec![CreateLineItemRequest {
                code: "RM-101".to_string(),
                line_item: "General ward".to_string(),
                amount: dec!(2500),
                description: None,
            }],
        };

        let err = service.create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(port.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_map_payers_requires_selection() {
        let port = Arc::new(CountingTariffsPort::default());
        let service = TariffService::new(port);

        let err = service
            .map_payers(TariffId::new(), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_map_payers_reports_outcome() {
        let port = Arc::new(CountingTariffsPort::default());
        let service = TariffService::new(port);

        let outcome = service
            .map_payers(TariffId::new(), vec![PayerId::new(), PayerId::new()])
            .await
            .unwrap();
        assert!(outcome.is_complete_success());
        assert_eq!(outcome.total(), 2);
    }
}
