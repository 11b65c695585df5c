use tracing::error;

use crate::AppError;
use crate::AppState;
use backend_domain::ScanEvent;

/// Full scan of the collection; there is no filtering or paging.
pub async fn list_scans(state: &AppState) -> Result<Vec<ScanEvent>, AppError> {
    let scans = state.scan_repo.fetch_scans().await.map_err(|err| {
        state.metrics.record_store_error();
        error!("failed to fetch scans: {}", err);
        AppError::Internal(err)
    })?;
    Ok(scans)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::testing::{state_with, MemoryRepo};
    use backend_domain::Location;

    #[tokio::test]
    async fn returns_every_stored_scan_in_order() {
        let repo = Arc::new(MemoryRepo::default());
        for (i, qr) in ["first", "second", "third"].into_iter().enumerate() {
            repo.scans.lock().unwrap().push(ScanEvent {
                username: Some(format!("user {}", i + 1)),
                qr_data: qr.to_string(),
                location: Location::new(i as f64, 0.0),
                time: Utc::now(),
            });
        }
        let state = state_with(repo);

        let scans = list_scans(&state).await.unwrap();
        let payloads: Vec<_> = scans.iter().map(|scan| scan.qr_data.as_str()).collect();
        assert_eq!(payloads, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn store_failure_is_internal() {
        let state = state_with(Arc::new(MemoryRepo {
            fail: true,
            ..MemoryRepo::default()
        }));
        assert!(matches!(list_scans(&state).await, Err(AppError::Internal(_))));
    }
}
