use async_trait::async_trait;
use roam_dns_application::ports::RecordRepository;
use roam_dns_domain::{DomainError, DomainRecord};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Mapping store backed by a single JSON object file.
///
/// The in-memory map is the authority; the file is rewritten in full and
/// synced on every accepted update, so an acknowledged mapping survives a
/// restart. The write guard is held across the persist, which keeps two
/// updates from interleaving their file writes; reads share the lock and
/// wait only while a write+persist is in flight.
pub struct JsonFileRecordRepository {
    path: PathBuf,
    records: RwLock<HashMap<String, Arc<str>>>,
}

impl JsonFileRecordRepository {
    /// Open the repository, loading any previously persisted mappings.
    /// A missing file is a normal first start and yields an empty store.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        let records: HashMap<String, Arc<str>> =
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => {
                    let parsed: HashMap<String, String> = serde_json::from_str(&contents)
                        .map_err(|e| {
                            DomainError::PersistenceError(format!(
                                "Failed to parse {}: {}",
                                path.display(),
                                e
                            ))
                        })?;
                    parsed
                        .into_iter()
                        .map(|(domain, address)| (domain, Arc::from(address)))
                        .collect()
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    info!(path = %path.display(), "No persisted mappings, starting empty");
                    HashMap::new()
                }
                Err(e) => {
                    return Err(DomainError::PersistenceError(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    )))
                }
            };

        if !records.is_empty() {
            info!(
                path = %path.display(),
                mappings = records.len(),
                "Loaded persisted domain mappings"
            );
        }

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Rewrite the whole mapping file and sync it to stable storage.
    async fn persist(&self, records: &HashMap<String, Arc<str>>) -> Result<(), DomainError> {
        let ordered: BTreeMap<&str, &str> = records
            .iter()
            .map(|(domain, address)| (domain.as_str(), address.as_ref()))
            .collect();
        let json = serde_json::to_string_pretty(&ordered)
            .map_err(|e| DomainError::PersistenceError(e.to_string()))?;

        let write = async {
            let mut file = tokio::fs::File::create(&self.path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
            Ok::<(), io::Error>(())
        };

        write.await.map_err(|e| {
            DomainError::PersistenceError(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl RecordRepository for JsonFileRecordRepository {
    async fn get(&self, domain: &str) -> Option<Arc<str>> {
        let domain = DomainRecord::normalize_domain(domain);
        self.records.read().await.get(&domain).cloned()
    }

    async fn set(&self, domain: &str, address: &str) -> Result<DomainRecord, DomainError> {
        DomainRecord::validate_domain(domain).map_err(DomainError::InvalidDomainName)?;
        DomainRecord::validate_address(address).map_err(DomainError::InvalidAddress)?;

        let domain = DomainRecord::normalize_domain(domain);
        let address: Arc<str> = Arc::from(address);

        let mut records = self.records.write().await;
        let previous = records.insert(domain.clone(), Arc::clone(&address));

        if let Err(e) = self.persist(&records).await {
            // The failed write never became durable, so readers must not
            // observe it either.
            match previous {
                Some(old) => {
                    records.insert(domain, old);
                }
                None => {
                    records.remove(&domain);
                }
            }
            warn!(error = %e, "Rolled back mapping update after persistence failure");
            return Err(e);
        }

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
