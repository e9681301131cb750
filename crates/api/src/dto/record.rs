use roam_dns_domain::DomainRecord;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /update`. Both are optional at the wire level;
/// presence is enforced by the update gateway, so a missing parameter gets
/// the same rejection as an empty one.
#[derive(Debug, Deserialize)]
pub struct UpdateParams {
    pub domain: Option<String>,
    pub ip: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub status: &'static str,
    pub domain: String,
    pub ip: String,
}

impl UpdateResponse {
    pub fn accepted(record: &DomainRecord) -> Self {
        Self {
            status: "success",
            domain: record.domain.to_string(),
            ip: record.address.to_string(),
        }
    }
}
