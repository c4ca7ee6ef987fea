//! Payer affiliation workflows
//!
//! The affiliation screens work against the payer catalogue: list what is
//! affiliated, affiliate one payer by id (skipping ones already done), and
//! bulk-affiliate a selection with a per-payer outcome.

use std::sync::Arc;

use validator::Validate;

use core_kernel::{AffiliationId, BulkOutcome, PayerId};
use domain_registry::ports::PayersPort;
use domain_registry::{
    CreatePayerAffiliationRequest, Paginated, PayerAffiliation, PayerAffiliationFilters,
    PayerLookup,
};

use crate::error::AppError;

/// Outcome of the affiliate-by-id flow
#[derive(Debug)]
pub enum AffiliationOutcome {
    /// A new affiliation was created
    Created(PayerAffiliation),
    /// The payer was already affiliated; nothing was sent
    AlreadyAffiliated(String),
}

/// Drives the payer affiliation screens
pub struct PayerAffiliationService {
    port: Arc<dyn PayersPort>,
}

impl PayerAffiliationService {
    pub fn new(port: Arc<dyn PayersPort>) -> Self {
        Self { port }
    }

    pub async fn list(
        &self,
        filters: &PayerAffiliationFilters,
    ) -> Result<Paginated<PayerAffiliation>, AppError> {
        Ok(self.port.list_affiliations(filters).await?)
    }

    /// Finds a payer in the catalogue and reports its affiliation state
    pub async fn find_payer(&self, payer_id: PayerId) -> Result<PayerLookup, AppError> {
        let catalogue = self.port.available_payers().await?;
        catalogue.find_by_id(&payer_id).ok_or_else(|| {
            AppError::validation(format!(
                "Payer with ID {payer_id} not found in available payers"
            ))
        })
    }

    /// Affiliates a payer by catalogue id, skipping if already affiliated
    pub async fn affiliate_by_id(&self, payer_id: PayerId) -> Result<AffiliationOutcome, AppError> {
        let lookup = self.find_payer(payer_id).await?;
        if lookup.is_affiliated {
            tracing::info!(payer = %lookup.payer.name, "payer already affiliated");
            return Ok(AffiliationOutcome::AlreadyAffiliated(lookup.payer.name));
        }

        let request = CreatePayerAffiliationRequest {
            payer_name: lookup.payer.name.clone(),
        };
        request.validate()?;
        let affiliation = self.port.create_affiliation(&request).await?;
        Ok(AffiliationOutcome::Created(affiliation))
    }

    /// Affiliates many payers in one backend call
    pub async fn bulk_affiliate(
        &self,
        payer_names: Vec<String>,
    ) -> Result<BulkOutcome<String>, AppError> {
        if payer_names.is_empty() {
            return Err(AppError::validation("No payers selected"));
        }
        Ok(self.port.bulk_affiliate(&payer_names).await?)
    }

    pub async fn remove(&self, id: AffiliationId) -> Result<(), AppError> {
        Ok(self.port.delete_affiliation(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{DomainPort, PortError};
    use domain_registry::{AvailablePayers, Payer, PayerType, ResourceStatus, UpdatePayerAffiliationRequest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CataloguePort {
        affiliated: Payer,
        open: Payer,
        creates: AtomicUsize,
    }

    impl CataloguePort {
        fn new() -> Self {
            Self {
                affiliated: Self::payer("National Health Assurance", PayerType::InsuranceCompany),
                open: Self::payer("MediServe TPA", PayerType::Tpa),
                creates: AtomicUsize::new(0),
            }
        }

        fn payer(name: &str, payer_type: PayerType) -> Payer {
            Payer {
                id: PayerId::new(),
                name: name.to_string(),
                payer_type,
                code: "P-01".to_string(),
                status: Some(ResourceStatus::Active),
                address: None,
                contact_email: None,
                contact_person: None,
            }
        }
    }

    impl DomainPort for CataloguePort {}

    #[async_trait]
    impl PayersPort for CataloguePort {
        async fn list_affiliations(
            &self,
            _filters: &PayerAffiliationFilters,
        ) -> Result<Paginated<PayerAffiliation>, PortError> {
            Ok(Paginated::single_page(Vec::new()))
        }

        async fn get_affiliation(
            &self,
            id: AffiliationId,
        ) -> Result<PayerAffiliation, PortError> {
            Err(PortError::not_found("Affiliation", id))
        }

        async fn create_affiliation(
            &self,
            request: &CreatePayerAffiliationRequest,
        ) -> Result<PayerAffiliation, PortError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(PayerAffiliation {
                id: AffiliationId::new(),
                payer_id: self.open.id,
                payer_name: request.payer_name.clone(),
                payer_type: PayerType::Tpa,
                payer_code: "P-01".to_string(),
                affiliated_by: None,
                affiliated_by_email: None,
                affiliated_at: None,
            })
        }

        async fn update_affiliation(
            &self,
            id: AffiliationId,
            _request: &UpdatePayerAffiliationRequest,
        ) -> Result<PayerAffiliation, PortError> {
            Err(PortError::not_found("Affiliation", id))
        }

        async fn delete_affiliation(&self, _id: AffiliationId) -> Result<(), PortError> {
            Ok(())
        }

        async fn bulk_affiliate(
            &self,
            payer_names: &[String],
        ) -> Result<BulkOutcome<String>, PortError> {
            let mut outcome = BulkOutcome::new();
            for name in payer_names {
                outcome.record_success(name.clone());
            }
            Ok(outcome)
        }

        async fn available_payers(&self) -> Result<AvailablePayers, PortError> {
            Ok(AvailablePayers {
                available_payers: vec![self.affiliated.clone(), self.open.clone()],
                affiliated_payers: vec![self.affiliated.name.clone()],
            })
        }

        async fn payers_by_type(
            &self,
            _payer_type: PayerType,
        ) -> Result<Vec<Payer>, PortError> {
            Ok(Vec::new())
        }

        async fn payer_details(&self, id: PayerId) -> Result<Payer, PortError> {
            Err(PortError::not_found("Payer", id))
        }
    }

    #[tokio::test]
    async fn test_affiliate_by_id_creates_when_open() {
        let port = Arc::new(CataloguePort::new());
        let open_id = port.open.id;
        let service = PayerAffiliationService::new(port.clone());

        let outcome = service.affiliate_by_id(open_id).await.unwrap();
        assert!(matches!(outcome, AffiliationOutcome::Created(_)));
        assert_eq!(port.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_affiliate_by_id_skips_when_already_affiliated() {
        let port = Arc::new(CataloguePort::new());
        let done_id = port.affiliated.id;
        let service = PayerAffiliationService::new(port.clone());

        let outcome = service.affiliate_by_id(done_id).await.unwrap();
        assert!(matches!(
            outcome,
            AffiliationOutcome::AlreadyAffiliated(ref name) if name == "National Health Assurance"
        ));
        assert_eq!(port.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_affiliate_unknown_payer_errors() {
        let port = Arc::new(CataloguePort::new());
        let service = PayerAffiliationService::new(port);

        let err = service.affiliate_by_id(PayerId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bulk_affiliate_requires_selection() {
        let port = Arc::new(CataloguePort::new());
        let service = PayerAffiliationService::new(port);

        let err = service.bulk_affiliate(Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
