use crate::ports::RecordRepository;
use roam_dns_domain::DomainRecord;
use std::sync::Arc;

/// Read-only enumeration of every registered mapping.
pub struct ListDomainsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl ListDomainsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<DomainRecord> {
        self.repository.snapshot().await
    }
}
