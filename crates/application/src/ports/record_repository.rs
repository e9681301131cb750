use async_trait::async_trait;
use roam_dns_domain::{DomainError, DomainRecord};
use std::sync::Arc;

/// The authoritative domain → address mapping.
///
/// This is the single shared resource between the DNS loop and the HTTP
/// loop; implementations synchronize internally so callers need no locking
/// of their own.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Look up the registered address for a name. The name is normalized
    /// before the lookup. Pure read: never touches storage, never fails.
    async fn get(&self, domain: &str) -> Option<Arc<str>>;

    /// Register or replace a mapping. The domain is normalized and both
    /// fields validated; the full mapping set is durable on disk before
    /// this returns `Ok`. On a persistence failure the in-memory state is
    /// rolled back and `PersistenceError` returned.
    async fn set(&self, domain: &str, address: &str) -> Result<DomainRecord, DomainError>;

    /// A consistent point-in-time copy of every mapping, sorted by domain.
    /// No update is ever observed half-applied.
    async fn snapshot(&self) -> Vec<DomainRecord>;
}
