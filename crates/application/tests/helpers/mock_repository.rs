#![allow(dead_code)]

use async_trait::async_trait;
use roam_dns_application::ports::RecordRepository;
use roam_dns_domain::{DomainError, DomainRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository with a switchable persistence failure, for driving
/// the use cases without a real file behind them.
pub struct MockRecordRepository {
    records: RwLock<HashMap<String, Arc<str>>>,
    fail_persistence: AtomicBool,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            fail_persistence: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `set` fail as if the storage medium vanished.
    pub fn fail_persistence(&self) {
        self.fail_persistence.store(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Seed a mapping directly, bypassing validation.
    pub async fn insert_raw(&self, domain: &str, address: &str) {
        self.records
            .write()
            .await
            .insert(domain.to_string(), Arc::from(address));
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn get(&self, domain: &str) -> Option<Arc<str>> {
        let domain = DomainRecord::normalize_domain(domain);
        self.records.read().await.get(&domain).cloned()
    }

    async fn set(&self, domain: &str, address: &str) -> Result<DomainRecord, DomainError> {
        DomainRecord::validate_domain(domain).map_err(DomainError::InvalidDomainName)?;
        DomainRecord::validate_address(address).map_err(DomainError::InvalidAddress)?;

        if self.fail_persistence.load(Ordering::SeqCst) {
            return Err(DomainError::PersistenceError(
                "mock persistence failure".to_string(),
            ));
        }

        let domain = DomainRecord::normalize_domain(domain);
        let address: Arc<str> = Arc::from(address);
        self.records
            .write()
            .await
            .insert(domain.clone(), Arc::clone(&address));

        Ok(DomainRecord::new(domain, address))
    }

    async fn snapshot(&self) -> Vec<DomainRecord> {
        let records = self.records.read().await;
        let mut all: Vec<DomainRecord> = records
            .iter()
            .map(|(domain, address)| DomainRecord::new(domain.as_str(), Arc::clone(address)))
            .collect();
        all.sort_by(|a, b| a.domain.cmp(&b.domain));
        all
    }
}
