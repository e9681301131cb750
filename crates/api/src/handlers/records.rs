use axum::{
    extract::{Query, State},
    response::Json,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::{
    dto::{UpdateParams, UpdateResponse},
    errors::ApiError,
    state::AppState,
};

#[instrument(skip(state), name = "api_update_record")]
pub async fn update_record(
    State(state): State<AppState>,
    Query(params): Query<UpdateParams>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let domain = params.domain.unwrap_or_default();
    let ip = params.ip.unwrap_or_default();

    let record = state.update_address.execute(&domain, &ip).await?;

    info!(
        domain = %record.domain,
        ip = %record.address,
        "Address update accepted"
    );

    Ok(Json(UpdateResponse::accepted(&record)))
}

#[instrument(skip(state), name = "api_list_domains")]
pub async fn list_domains(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    let records = state.list_domains.execute().await;

    Json(
        records
            .into_iter()
            .map(|record| (record.domain.to_string(), record.address.to_string()))
            .collect(),
    )
}
