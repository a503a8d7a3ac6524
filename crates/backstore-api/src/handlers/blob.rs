//! Blob store handlers.

use axum::Json;
use axum::extract::State;
use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use backstore_core::traits::blob::BlobMetadata;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /blob-store
pub async fn store(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let payload = format!(
        "Hello, World! {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    );
    let config = &state.config.blob;

    state
        .blobs
        .upload(
            &config.container,
            &config.blob_name,
            BlobMetadata::new(),
            Bytes::from(payload),
        )
        .await?;

    Ok(Json(json!({})))
}

/// GET /blob-store
pub async fn fetch(State(state): State<AppState>) -> Result<String, ApiError> {
    let config = &state.config.blob;
    let data = state
        .blobs
        .download(&config.container, &config.blob_name)
        .await?;

    Ok(format!("Data={}\n", String::from_utf8_lossy(&data)))
}
