use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use backend_application::{AppState, Metrics};
use backend_domain::ScanRepository;
use backend_infrastructure::{redact_uri, AppConfig, MongoScanRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    /// Loads configuration and acquires the store connection. Pair with
    /// [`AppContext::shutdown`].
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();
        let credentials = config.to_credentials();

        info!(
            bind_addr = %runtime_config.bind_addr,
            debug = runtime_config.debug,
            mongodb_uri = %redact_uri(&db_config.mongodb_uri),
            mongodb_database = %db_config.mongodb_database,
            mongodb_collection = %db_config.mongodb_collection,
            users = credentials.len(),
            "config loaded"
        );
        if credentials.is_empty() {
            warn!("no users configured, every login will be rejected");
        }

        let repo = Arc::new(MongoScanRepo::connect(&db_config).await?);
        if let Err(err) = repo.ping().await {
            repo.close().await;
            return Err(err).context("mongodb ping failed");
        }

        let state = AppState {
            config: runtime_config,
            credentials: Arc::new(credentials),
            scan_repo: repo,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }

    pub async fn shutdown(self) {
        self.state.scan_repo.close().await;
    }
}
