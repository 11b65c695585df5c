use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use backend_application::commands::login_commands;
use backend_application::{AppError, AppState};
use backend_domain::LoginRequest;

use crate::error::HttpError;
use crate::handlers::MessageBody;
use crate::middleware::json_object;

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageBody>, HttpError> {
    let payload = json_object(&body).ok_or(AppError::MissingBody)?;
    login_commands::login(&state, LoginRequest::from_payload(&payload))?;
    Ok(Json(MessageBody::new("login successful")))
}
