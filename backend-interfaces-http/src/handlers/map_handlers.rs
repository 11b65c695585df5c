use axum::extract::State;
use axum::response::Html;
use tracing::error;

use backend_application::queries::scan_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::views::map_page;

pub async fn map_view(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let scans = scan_queries::list_scans(&state).await?;
    let page = map_page::render(&scans).map_err(|err| {
        error!("failed to render map page: {}", err);
        HttpError::Internal(err.to_string())
    })?;
    Ok(Html(page))
}
