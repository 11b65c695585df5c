use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
///
/// Accepts `Z` or a numeric offset after any time precision, hour-only
/// times (`2024-01-01T12`) and bare dates. Surrounding whitespace is an
/// error.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if value.is_empty() {
        return Err(anyhow!("timestamp is empty"));
    }
    if value.trim() != value {
        return Err(anyhow!("'{}' has surrounding whitespace", value));
    }
    let candidate = canonical_iso(value);
    let candidate = candidate.as_str();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(candidate) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(candidate, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(candidate, format) {
            return Ok(parsed.and_utc());
        }
    }
    let date = NaiveDate::parse_from_str(candidate, "%Y-%m-%d")
        .map_err(|err| anyhow!("'{}' is not an ISO-8601 timestamp: {}", value, err))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| anyhow!("'{}' has no valid midnight", value))
}

/// Rewrites a trailing `Z` as `+00:00` and widens an hour-only time to
/// `HH:00`, so the format tables above only deal with numeric offsets and
/// minute precision.
fn canonical_iso(value: &str) -> String {
    let mut out = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    let bytes = out.as_bytes();
    let hour_only = bytes.len() >= 13
        && matches!(bytes[10], b'T' | b' ')
        && bytes[11].is_ascii_digit()
        && bytes[12].is_ascii_digit()
        && matches!(bytes.get(13), None | Some(b'+') | Some(b'-'));
    if hour_only {
        out.insert_str(13, ":00");
    }
    out
}
