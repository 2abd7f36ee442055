//! The impls and functions
//!
use anyhow::{Context, Result};
use crate::record::{AccessRecord, ErrorEvent};

impl AccessRecord {
    /// Parses one raw log line. Anything that is not a JSON object with an
    /// integer-coercible `status` field is an error.
    pub fn parse(line: &str) -> Result<AccessRecord> {
        serde_json::from_str(line.trim())
            .with_context(|| "malformed access log record")
    }
    /// True iff the status code is in the server error range [500,600).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

impl From<AccessRecord> for ErrorEvent {
    fn from(record: AccessRecord) -> ErrorEvent {
        ErrorEvent {
            timestamp: record.time_iso8601.unwrap_or_else(|| String::from("-")),
            status: record.status,
            client: record.remote_addr.unwrap_or_else(|| String::from("-")),
            method: record.request_method.unwrap_or_else(|| String::from("-")),
            uri: record.request_uri.unwrap_or_else(|| String::from("-")),
            user_agent: record.http_user_agent.unwrap_or_else(|| String::from("-")),
        }
    }
}
