use crate::ports::RecordRepository;
use roam_dns_domain::{DomainError, DomainRecord};
use std::sync::Arc;
use tracing::info;

/// Accepts a candidate domain/address pair from the outside and applies it
/// to the mapping store. Blank input is rejected before the repository is
/// touched; a persistence failure comes back as `PersistenceError`, distinct
/// from the validation errors.
pub struct UpdateAddressUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl UpdateAddressUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, domain: &str, address: &str) -> Result<DomainRecord, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain is required".to_string(),
            ));
        }
        if address.trim().is_empty() {
            return Err(DomainError::InvalidAddress(
                "Address is required".to_string(),
            ));
        }

        let record = self.repository.set(domain, address).await?;

        info!(
            domain = %record.domain,
            address = %record.address,
            "Registered address update"
        );

        Ok(record)
    }
}
