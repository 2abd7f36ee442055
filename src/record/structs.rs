use serde::{Deserialize, Deserializer};
use serde_derive::Deserialize;

/// One line of the nginx JSON access log.
///
/// nginx emits `$status` as a string, so the status field accepts both a
/// JSON number and a numeric string:
/// ```json
/// {"time_iso8601":"2025-08-29T10:15:00+00:00","remote_addr":"10.0.0.7",
///  "request_method":"GET","request_uri":"/api/posts","status":"502",
///  "http_user_agent":"curl/8.0.1"}
/// ```
#[derive(Debug, Deserialize)]
pub struct AccessRecord {
    #[serde(default)]
    pub time_iso8601: Option<String>,
    #[serde(deserialize_with = "status_from_number_or_string")]
    pub status: u16,
    #[serde(default)]
    pub remote_addr: Option<String>,
    #[serde(default)]
    pub request_method: Option<String>,
    #[serde(default)]
    pub request_uri: Option<String>,
    #[serde(default)]
    pub http_user_agent: Option<String>,
}

/// Notification payload data derived from an [AccessRecord] classified as a
/// server error. Optional record fields are defaulted to "-" here.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub timestamp: String,
    pub status: u16,
    pub client: String,
    pub method: String,
    pub uri: String,
    pub user_agent: String,
}

fn status_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StatusField {
        Number(u16),
        Text(String),
    }
    match StatusField::deserialize(deserializer)? {
        StatusField::Number(status) => Ok(status),
        StatusField::Text(text) => text.trim().parse::<u16>().map_err(serde::de::Error::custom),
    }
}
