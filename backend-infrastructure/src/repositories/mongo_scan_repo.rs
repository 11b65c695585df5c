use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, from_document, DateTime as BsonDateTime, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use backend_domain::{DbConfig, Location, ScanEvent, ScanRepository};

/// Stored document shape. `_id` is assigned by the server and never read back.
#[derive(Debug, Serialize, Deserialize)]
struct ScanDocument {
    #[serde(default)]
    username: Option<String>,
    qr_data: String,
    location: Location,
    time: BsonDateTime,
}

impl From<&ScanEvent> for ScanDocument {
    fn from(scan: &ScanEvent) -> Self {
        Self {
            username: scan.username.clone(),
            qr_data: scan.qr_data.clone(),
            location: scan.location,
            time: BsonDateTime::from_millis(scan.time.timestamp_millis()),
        }
    }
}

impl ScanDocument {
    fn into_scan(self) -> Result<ScanEvent> {
        let millis = self.time.timestamp_millis();
        let time = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| anyhow!("stored scan time {} is out of range", millis))?;
        Ok(ScanEvent {
            username: self.username,
            qr_data: self.qr_data,
            location: self.location,
            time,
        })
    }
}

/// Converts raw stored documents, skipping any that do not have the scan
/// shape so one bad record does not hide the rest.
fn decode_scans(documents: Vec<Document>) -> Vec<ScanEvent> {
    documents
        .into_iter()
        .filter_map(|document| {
            match from_document::<ScanDocument>(document)
                .map_err(anyhow::Error::from)
                .and_then(ScanDocument::into_scan)
            {
                Ok(scan) => Some(scan),
                Err(err) => {
                    warn!(error = %err, "skipping stored scan with unexpected shape");
                    None
                }
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct MongoScanRepo {
    client: Client,
    database: String,
    scans: Collection<ScanDocument>,
}

impl MongoScanRepo {
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let scans = client
            .database(&config.mongodb_database)
            .collection::<ScanDocument>(&config.mongodb_collection);
        info!(
            database = %config.mongodb_database,
            collection = %config.mongodb_collection,
            "mongodb client created"
        );
        Ok(Self {
            client,
            database: config.mongodb_database.clone(),
            scans,
        })
    }
}

#[async_trait]
impl ScanRepository for MongoScanRepo {
    async fn insert_scan(&self, scan: &ScanEvent) -> Result<()> {
        self.scans.insert_one(ScanDocument::from(scan)).await?;
        Ok(())
    }

    async fn fetch_scans(&self) -> Result<Vec<ScanEvent>> {
        let cursor = self
            .scans
            .clone_with_type::<Document>()
            .find(doc! {})
            .projection(doc! {
                "_id": 0,
                "username": 1,
                "time": 1,
                "location": 1,
                "qr_data": 1,
            })
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(decode_scans(documents))
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("mongodb client shut down");
    }
}
