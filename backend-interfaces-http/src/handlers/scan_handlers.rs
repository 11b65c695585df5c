use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use backend_application::commands::scan_commands;
use backend_application::queries::scan_queries;
use backend_application::{AppError, AppState};
use backend_domain::{ScanEvent, ScanSubmission};

use crate::error::HttpError;
use crate::handlers::MessageBody;
use crate::middleware::json_object;

pub async fn save_scan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageBody>), HttpError> {
    let payload = json_object(&body).ok_or_else(|| {
        debug!("scan request without a JSON object body ({} bytes)", body.len());
        AppError::MissingBody
    })?;
    let scan = scan_commands::record_scan(&state, ScanSubmission::from_payload(&payload)).await?;
    info!(
        username = scan.username.as_deref().unwrap_or("<anonymous>"),
        lat = scan.location.lat,
        lng = scan.location.lng,
        "scan saved"
    );
    Ok((StatusCode::CREATED, Json(MessageBody::new("scan saved"))))
}

pub async fn list_scans(State(state): State<AppState>) -> Result<Json<Vec<ScanEvent>>, HttpError> {
    let scans = scan_queries::list_scans(&state).await?;
    Ok(Json(scans))
}
