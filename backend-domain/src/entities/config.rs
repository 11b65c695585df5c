// Runtime configuration handed to the application and HTTP layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub debug: bool,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
}
