use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use backend_application::{AppState, Metrics};
use backend_domain::{CredentialStore, RuntimeConfig, ScanEvent, ScanRepository};
use backend_interfaces_http::build_router;

pub const USERS: [(&str, &str); 5] = [
    ("user 1", "password123"),
    ("user 2", "mypassword123"),
    ("user 3", "password321"),
    ("user 4", "mypassword321"),
    ("user 5", "pass123word"),
];

#[derive(Default)]
pub struct MemoryScanRepo {
    scans: Mutex<Vec<ScanEvent>>,
}

impl MemoryScanRepo {
    pub fn stored(&self) -> Vec<ScanEvent> {
        self.scans.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScanRepository for MemoryScanRepo {
    async fn insert_scan(&self, scan: &ScanEvent) -> anyhow::Result<()> {
        self.scans.lock().unwrap().push(scan.clone());
        Ok(())
    }

    async fn fetch_scans(&self) -> anyhow::Result<Vec<ScanEvent>> {
        Ok(self.stored())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}

pub struct UnreachableScanRepo;

#[async_trait]
impl ScanRepository for UnreachableScanRepo {
    async fn insert_scan(&self, _scan: &ScanEvent) -> anyhow::Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn fetch_scans(&self) -> anyhow::Result<Vec<ScanEvent>> {
        Err(anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn close(&self) {}
}

pub fn app(repo: Arc<dyn ScanRepository>) -> Router {
    let credentials = USERS
        .iter()
        .map(|(name, password)| (name.to_string(), password.to_string()))
        .collect::<CredentialStore>();
    build_router(AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            debug: false,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 2,
        },
        credentials: Arc::new(credentials),
        scan_repo: repo,
        metrics: Arc::new(Metrics::default()),
    })
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, Some(&body.to_string())).await;
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}
