use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL stamped on every answer, in seconds.
    #[serde(default = "default_record_ttl")]
    pub record_ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            record_ttl: default_record_ttl(),
        }
    }
}

fn default_record_ttl() -> u32 {
    300
}
