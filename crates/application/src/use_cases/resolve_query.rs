use crate::ports::RecordRepository;
use roam_dns_domain::{DnsQuery, DnsRecord, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of answering a single query against the mapping store.
///
/// Absence of a mapping is a normal result, not a fault: it becomes an
/// NXDOMAIN reply on the wire, never an error or refusal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name is registered; answer authoritatively with this record.
    Answer(DnsRecord),
    /// Unknown name, or a query type we do not serve.
    NxDomain,
}

/// Decides the answer for one parsed DNS query.
///
/// Single-shot, no session state: safe to invoke concurrently and
/// repeatedly. Its only dependency is the shared record repository.
pub struct ResolveQueryUseCase {
    repository: Arc<dyn RecordRepository>,
    record_ttl: u32,
}

impl ResolveQueryUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>, record_ttl: u32) -> Self {
        Self {
            repository,
            record_ttl,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Resolution {
        if query.record_type != RecordType::A {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                "Non-address query type, answering NXDOMAIN"
            );
            return Resolution::NxDomain;
        }

        let Some(address) = self.repository.get(&query.domain).await else {
            debug!(domain = %query.domain, "No mapping registered, answering NXDOMAIN");
            return Resolution::NxDomain;
        };

        match address.parse::<Ipv4Addr>() {
            Ok(ip) => Resolution::Answer(DnsRecord::new(
                Arc::clone(&query.domain),
                ip,
                self.record_ttl,
            )),
            Err(_) => {
                // Registration is permissive, so a mapping may hold a value
                // that cannot go into an A record.
                warn!(
                    domain = %query.domain,
                    address = %address,
                    "Registered address is not a valid IPv4 address, answering NXDOMAIN"
                );
                Resolution::NxDomain
            }
        }
    }
}
