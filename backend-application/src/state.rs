use std::sync::Arc;

use backend_domain::ports::ScanRepository;
use backend_domain::{CredentialStore, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub credentials: Arc<CredentialStore>,
    pub scan_repo: Arc<dyn ScanRepository>,
    pub metrics: Arc<Metrics>,
}
