use serde_json::Value;
use tracing::{debug, error};

use crate::AppError;
use crate::AppState;
use backend_domain::{parse_timestamp, ScanEvent, ScanSubmission};

pub async fn record_scan(state: &AppState, submission: ScanSubmission) -> Result<ScanEvent, AppError> {
    let missing = submission.missing_fields();
    let ScanSubmission {
        username,
        qr_data: Some(qr_data),
        location: Some(location),
        timestamp: Some(timestamp),
    } = submission
    else {
        state.metrics.record_scan_rejected();
        return Err(AppError::MissingFields(missing.join(", ")));
    };

    let time = match &timestamp {
        Value::String(raw) => parse_timestamp(raw),
        other => Err(anyhow::anyhow!("expected a string, got {}", other)),
    }
    .map_err(|err| {
        state.metrics.record_scan_rejected();
        debug!("rejected scan timestamp: {}", err);
        AppError::InvalidTimestamp(err.to_string())
    })?;

    let scan = ScanEvent {
        username,
        qr_data,
        location,
        time,
    };
    if let Err(err) = state.scan_repo.insert_scan(&scan).await {
        state.metrics.record_store_error();
        error!("failed to insert scan: {}", err);
        return Err(AppError::Internal(err));
    }
    state.metrics.record_scan();
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::testing::{state_with, MemoryRepo};
    use backend_domain::Location;

    fn submission(value: Value) -> ScanSubmission {
        ScanSubmission::from_payload(value.as_object().unwrap())
    }

    #[tokio::test]
    async fn valid_scan_is_persisted() {
        let repo = Arc::new(MemoryRepo::default());
        let state = state_with(repo.clone());

        let scan = record_scan(
            &state,
            submission(json!({
                "username": "user 1",
                "qr_data": "https://example.org/asset/17",
                "location": {"lat": 45.76, "lng": 4.83},
                "timestamp": "2024-01-01T12:00:00",
            })),
        )
        .await
        .unwrap();

        assert_eq!(scan.time, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let stored = repo.scans.lock().unwrap().clone();
        assert_eq!(stored, vec![scan]);
        assert_eq!(stored[0].location, Location::new(45.76, 4.83));
        assert_eq!(state.metrics.scans_recorded(), 1);
    }

    #[tokio::test]
    async fn duplicates_are_distinct_records() {
        let repo = Arc::new(MemoryRepo::default());
        let state = state_with(repo.clone());
        let body = json!({
            "qr_data": "same",
            "location": {"lat": 1.0, "lng": 2.0},
            "timestamp": "2024-01-01T12:00:00Z",
        });

        record_scan(&state, submission(body.clone())).await.unwrap();
        record_scan(&state, submission(body)).await.unwrap();

        let stored = repo.scans.lock().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].username, None);
    }

    #[tokio::test]
    async fn missing_location_is_not_persisted() {
        let repo = Arc::new(MemoryRepo::default());
        let state = state_with(repo.clone());

        let err = record_scan(
            &state,
            submission(json!({"qr_data": "abc", "timestamp": "2024-01-01T12:00:00"})),
        )
        .await
        .unwrap_err();

        match err {
            AppError::MissingFields(fields) => assert_eq!(fields, "location"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(repo.scans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparseable_timestamps_are_not_persisted() {
        let repo = Arc::new(MemoryRepo::default());
        let state = state_with(repo.clone());

        for timestamp in [json!("not-a-date"), json!(1704110400)] {
            let err = record_scan(
                &state,
                submission(json!({
                    "qr_data": "abc",
                    "location": {"lat": 1.0, "lng": 2.0},
                    "timestamp": timestamp,
                })),
            )
            .await
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidTimestamp(_)));
        }
        assert!(repo.scans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_internal() {
        let repo = Arc::new(MemoryRepo {
            fail: true,
            ..MemoryRepo::default()
        });
        let state = state_with(repo);

        let err = record_scan(
            &state,
            submission(json!({
                "qr_data": "abc",
                "location": {"lat": 1.0, "lng": 2.0},
                "timestamp": "2024-01-01",
            })),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(state.metrics.render_prometheus().contains("qrtrace_store_errors_total 1\n"));
    }
}
