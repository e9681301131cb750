use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn health_check() -> &'static str {
    info!("Health check requested");
    "OK"
}
