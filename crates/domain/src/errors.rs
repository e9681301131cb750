use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
