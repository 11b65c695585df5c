use tracing::{info, warn};

use crate::AppError;
use crate::AppState;
use backend_domain::LoginRequest;

/// Checks a username/password pair against the configured credentials.
/// Returns the accepted username.
pub fn login(state: &AppState, request: LoginRequest) -> Result<String, AppError> {
    let missing = request.missing_fields();
    let (Some(username), Some(password)) = (request.username, request.password.as_deref()) else {
        return Err(AppError::MissingFields(missing.join(", ")));
    };

    if state.credentials.verify(&username, password) {
        state.metrics.record_login(true);
        info!(username = %username, "login accepted");
        Ok(username)
    } else {
        state.metrics.record_login(false);
        warn!(username = %username, "login rejected");
        Err(AppError::InvalidCredentials)
    }
}
