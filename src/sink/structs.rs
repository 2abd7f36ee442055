use std::time::Duration;
use anyhow::Result;
use crate::record::ErrorEvent;

/// Bound on every outbound webhook call.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// The notification sink as seen by the run loop: one attempt per event.
pub trait NotifySink {
    fn notify(&mut self, event: &ErrorEvent) -> Result<()>;
}

/// Slack incoming-webhook sink, constructed once per run.
pub struct SlackSink {
    pub(crate) webhook_url: String,
    pub(crate) client: reqwest::blocking::Client,
}
