use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A registered domain → address mapping.
///
/// The domain is stored in normalized form (lower-case, no trailing dot).
/// The address is kept as the caller supplied it; whether it parses as an
/// IPv4 address is decided at resolution time, not on registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub domain: Arc<str>,
    pub address: Arc<str>,
}

impl DomainRecord {
    pub fn new(domain: impl Into<Arc<str>>, address: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            address: address.into(),
        }
    }

    /// Case-fold and strip the trailing dot. Applied to every name before it
    /// is used as a lookup key, so `Example.com.` and `example.com` collide.
    pub fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_ascii_lowercase()
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > 253 {
            return Err("Domain cannot exceed 253 characters".to_string());
        }
        Ok(())
    }

    pub fn validate_address(address: &str) -> Result<(), String> {
        if address.is_empty() {
            return Err("Address cannot be empty".to_string());
        }
        Ok(())
    }
}
