mod record_repository;

pub use record_repository::RecordRepository;

// Re-export for convenience
pub use roam_dns_domain::DnsQuery;
