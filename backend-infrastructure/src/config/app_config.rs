use std::collections::BTreeMap;
use std::env;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{CredentialStore, DbConfig, RuntimeConfig};

use super::validation::validate_mongodb_uri;

pub const CONFIG_ENV: &str = "QRTRACE_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub debug: bool,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    /// username -> password
    pub users: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            debug: false,
            mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
            mongodb_database: "qrtrace".to_string(),
            mongodb_collection: "scans".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            users: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let mut config = Self::read_file(Path::new(&path)).await?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    async fn read_file(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            warn!("{} not found, using defaults", file_path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).await?;
        toml::from_str(&content)
            .map_err(|err| anyhow!("invalid config {}: {}", file_path.display(), err))
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.mongodb_uri = self.mongodb_uri.trim().to_string();
        self.mongodb_database = self.mongodb_database.trim().to_string();
        self.mongodb_collection = self.mongodb_collection.trim().to_string();
        self.users = std::mem::take(&mut self.users)
            .into_iter()
            .map(|(name, password)| (name.trim().to_string(), password))
            .collect();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_mongodb_uri(&self.mongodb_uri)?;
        if self.mongodb_database.is_empty() {
            return Err(anyhow!("mongodb_database must not be empty"));
        }
        if self.mongodb_collection.is_empty() {
            return Err(anyhow!("mongodb_collection must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.users.keys().any(|name| name.is_empty()) {
            return Err(anyhow!("user names must not be empty"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            debug: self.debug,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            mongodb_uri: self.mongodb_uri.clone(),
            mongodb_database: self.mongodb_database.clone(),
            mongodb_collection: self.mongodb_collection.clone(),
        }
    }

    pub fn to_credentials(&self) -> CredentialStore {
        self.users
            .iter()
            .map(|(name, password)| (name.clone(), password.clone()))
            .collect()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("QRTRACE_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("QRTRACE_PORT") {
            match (self.bind_addr.trim().parse::<SocketAddr>(), value.trim().parse::<u16>()) {
                (Ok(mut addr), Ok(port)) => {
                    addr.set_port(port);
                    self.bind_addr = addr.to_string();
                }
                _ => warn!("ignoring QRTRACE_PORT={}", value),
            }
        }
        if let Some(value) = lookup("QRTRACE_DEBUG") {
            self.debug = parse_flag(&value).unwrap_or(self.debug);
        }
        if let Some(value) = lookup("QRTRACE_MONGODB_URI") {
            self.mongodb_uri = value;
        }
        if let Some(value) = lookup("QRTRACE_MONGODB_DATABASE") {
            self.mongodb_database = value;
        }
        if let Some(value) = lookup("QRTRACE_MONGODB_COLLECTION") {
            self.mongodb_collection = value;
        }
        if let Some(value) = lookup("QRTRACE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("QRTRACE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("QRTRACE_USERS") {
            self.users = parse_env_user_list(&value);
        }
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_env_user_list(value: &str) -> BTreeMap<String, String> {
    value
        .split(',')
        .filter_map(|entry| entry.split_once(':'))
        .map(|(name, password)| (name.trim().to_string(), password.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}
