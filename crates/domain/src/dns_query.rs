use super::RecordType;
use std::sync::Arc;

/// A single parsed query: one name, one requested type. Wire decoding is the
/// transport's job; by the time a query reaches the core it looks like this.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
