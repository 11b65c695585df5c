use async_trait::async_trait;

use crate::entities::ScanEvent;

#[async_trait]
pub trait ScanRepository: Send + Sync {
    async fn insert_scan(&self, scan: &ScanEvent) -> anyhow::Result<()>;
    /// Every stored scan, in store order, without store identifiers.
    async fn fetch_scans(&self) -> anyhow::Result<Vec<ScanEvent>>;
    async fn ping(&self) -> anyhow::Result<()>;
    /// Releases the underlying connection. Called once, after the server drains.
    async fn close(&self);
}
