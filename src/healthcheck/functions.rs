//! The impls and functions
//!
use log::*;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::json;
use crate::healthcheck::HealthAlert;
use crate::sink::NOTIFY_TIMEOUT;

/// GETs the target URL once and reports DOWN to the webhook on a non-2xx
/// response or a transport error. The returned error covers alert delivery
/// only; a failed health check with a delivered alert is a successful run.
pub fn run_health_check(target_url: &str, webhook_url: &str) -> Result<()> {
    info!("health check: {}", target_url);
    let client = reqwest::blocking::Client::builder()
        .timeout(NOTIFY_TIMEOUT)
        .build()
        .with_context(|| "Cannot build http client")?;

    let reason = match client.get(target_url).send() {
        Ok(response) if response.status().is_success() => {
            info!("health check successful: {}", response.status());
            return Ok(());
        }
        Ok(response) => format!("health check failed with status code: {}", response.status()),
        Err(e) => format!("health check failed: {}", e),
    };
    warn!("{}", reason);

    let alert = HealthAlert {
        service: String::from("web service"),
        url: target_url.to_string(),
        status: String::from("DOWN"),
        reason,
        timestamp: Utc::now().to_rfc3339(),
    };
    let response = client
        .post(webhook_url)
        .json(&payload(&alert))
        .send()
        .with_context(|| format!("Error sending alert to {}", webhook_url))?;
    if !response.status().is_success() {
        bail!("webhook returned status {}", response.status());
    }
    info!("published down alert for {}", target_url);
    Ok(())
}

pub(crate) fn payload(alert: &HealthAlert) -> serde_json::Value {
    json!({
        "attachments": [
            {
                "color": "danger",
                "pretext": format!(":rotating_light: *Service Down Alert: {}*", alert.url),
                "fields": [
                    { "title": "Service", "value": alert.service, "short": true },
                    { "title": "Status", "value": alert.status, "short": true },
                    { "title": "Endpoint", "value": alert.url, "short": false },
                    { "title": "Reason", "value": alert.reason, "short": false },
                    { "title": "Timestamp (UTC)", "value": alert.timestamp, "short": false }
                ],
                "footer": "Automated Health Check Alert"
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_alert_payload_carries_the_alert_fields() {
        let alert = HealthAlert {
            service: String::from("web service"),
            url: String::from("https://example.com/health"),
            status: String::from("DOWN"),
            reason: String::from("health check failed with status code: 503"),
            timestamp: String::from("2025-08-29T10:15:00+00:00"),
        };
        let payload = payload(&alert);
        let attachment = &payload["attachments"][0];
        assert_eq!(attachment["color"], "danger");
        assert_eq!(attachment["fields"][0]["value"], "web service");
        assert_eq!(attachment["fields"][1]["value"], "DOWN");
        assert_eq!(attachment["fields"][2]["value"], "https://example.com/health");
        assert_eq!(attachment["fields"][3]["value"], "health check failed with status code: 503");
    }
}
