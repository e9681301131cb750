use std::net::Ipv4Addr;
use std::sync::Arc;

/// An authoritative answer record bound to a resolved query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: Arc<str>,

    pub address: Ipv4Addr,

    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(domain: impl Into<Arc<str>>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            domain: domain.into(),
            address,
            ttl,
        }
    }
}
