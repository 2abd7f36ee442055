//! The impls and functions
//!
use log::*;
use anyhow::{bail, Context, Result};
use serde_json::json;
use crate::record::ErrorEvent;
use crate::sink::{NotifySink, SlackSink, NOTIFY_TIMEOUT};

impl SlackSink {
    pub fn new(webhook_url: &str) -> Result<SlackSink> {
        let client = reqwest::blocking::Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .with_context(|| "Cannot build http client")?;
        Ok(SlackSink { webhook_url: webhook_url.to_string(), client })
    }
    /// One attachment-style message per error record.
    pub(crate) fn payload(event: &ErrorEvent) -> serde_json::Value {
        json!({
            "attachments": [
                {
                    "color": "danger",
                    "pretext": format!(":rotating_light: *5xx error detected* ({})", event.status),
                    "fields": [
                        { "title": "Status", "value": event.status.to_string(), "short": true },
                        { "title": "Client", "value": event.client, "short": true },
                        { "title": "Request", "value": format!("{} {}", event.method, event.uri), "short": false },
                        { "title": "User agent", "value": event.user_agent, "short": false },
                        { "title": "Timestamp", "value": event.timestamp, "short": false }
                    ],
                    "footer": "weblog_alert access log monitor"
                }
            ]
        })
    }
}

impl NotifySink for SlackSink {
    fn notify(&mut self, event: &ErrorEvent) -> Result<()> {
        let response = self.client
            .post(&self.webhook_url)
            .json(&SlackSink::payload(event))
            .send()
            .with_context(|| format!("Error sending notification to {}", self.webhook_url))?;
        if !response.status().is_success() {
            bail!("webhook returned status {}", response.status());
        }
        debug!("notified: {} {} {}", event.status, event.method, event.uri);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_payload_carries_the_event_fields() {
        let event = ErrorEvent {
            timestamp: String::from("2025-08-29T10:15:00+00:00"),
            status: 502,
            client: String::from("10.0.0.7"),
            method: String::from("GET"),
            uri: String::from("/api/posts"),
            user_agent: String::from("curl/8.0.1"),
        };
        let payload = SlackSink::payload(&event);
        let attachment = &payload["attachments"][0];
        assert_eq!(attachment["color"], "danger");
        assert_eq!(attachment["fields"][0]["value"], "502");
        assert_eq!(attachment["fields"][1]["value"], "10.0.0.7");
        assert_eq!(attachment["fields"][2]["value"], "GET /api/posts");
        assert_eq!(attachment["fields"][3]["value"], "curl/8.0.1");
        assert_eq!(attachment["fields"][4]["value"], "2025-08-29T10:15:00+00:00");
    }
}
