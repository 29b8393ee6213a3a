use crate::dtos::{DiagnosticsResponse, StoreProbe};
use crate::error::truncate_detail;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};

const PROBE_COLLECTION_LIMIT: usize = 10;

/// Best-effort store probe. Every sub-step failure lands in the response
/// body as a tagged outcome; this endpoint never returns a non-2xx status.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let probe = match &state.store {
        None => StoreProbe::Unconfigured,
        Some(store) => match store.list_collection_names(PROBE_COLLECTION_LIMIT).await {
            Ok(collections) => StoreProbe::Connected { collections },
            Err(e) => StoreProbe::Unreachable {
                error: truncate_detail(&e.to_string()),
            },
        },
    };

    Json(DiagnosticsResponse {
        backend: "running",
        database_url_set: state.config.database_url.is_some(),
        database_name: state.config.database_name.clone(),
        store: probe,
    })
}
