use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use backend_domain::{CredentialStore, RuntimeConfig, ScanEvent, ScanRepository};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryRepo {
    pub scans: Mutex<Vec<ScanEvent>>,
    pub fail: bool,
}

#[async_trait]
impl ScanRepository for MemoryRepo {
    async fn insert_scan(&self, scan: &ScanEvent) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("store unavailable"));
        }
        self.scans.lock().unwrap().push(scan.clone());
        Ok(())
    }

    async fn fetch_scans(&self) -> anyhow::Result<Vec<ScanEvent>> {
        if self.fail {
            return Err(anyhow!("store unavailable"));
        }
        Ok(self.scans.lock().unwrap().clone())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}

pub fn state_with(repo: Arc<MemoryRepo>) -> AppState {
    let credentials = [("user 1", "password123"), ("user 2", "mypassword123")]
        .into_iter()
        .map(|(name, password)| (name.to_string(), password.to_string()))
        .collect::<CredentialStore>();
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            debug: false,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 5,
        },
        credentials: Arc::new(credentials),
        scan_repo: repo,
        metrics: Arc::new(Metrics::default()),
    }
}
