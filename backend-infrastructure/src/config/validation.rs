use anyhow::{anyhow, Result};

pub fn validate_mongodb_uri(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("mongodb_uri is empty"));
    }
    if !(value.starts_with("mongodb://") || value.starts_with("mongodb+srv://")) {
        return Err(anyhow!("mongodb_uri must start with mongodb:// or mongodb+srv://"));
    }
    Ok(())
}

/// Hides the `user:password@` part of a connection string for logging.
pub fn redact_uri(value: &str) -> String {
    let Some((scheme, rest)) = value.split_once("://") else {
        return value.to_string();
    };
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***@{}", scheme, &rest[at + 1..]),
        None => value.to_string(),
    }
}
