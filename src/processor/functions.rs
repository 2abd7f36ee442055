//! The impls and functions
//!
use std::path::{Path, PathBuf};
use log::*;
use anyhow::{Context, Result};
use crate::state::OffsetStore;
use crate::reader::LogDelta;
use crate::record::{AccessRecord, ErrorEvent};
use crate::sink::{NotifySink, SlackSink};
use crate::processor::{ProcessorConfig, RunSummary};

/// The access log path for a date: `<log_dir>/access-<YYYY-MM-DD>.log`.
pub fn log_path_for_date(log_dir: &Path, date: &str) -> PathBuf {
    log_dir.join(format!("access-{}.log", date))
}

/// One full processing run against the log file for `date`, notifying via a
/// [SlackSink] built from the configured webhook URL.
pub fn process_logs_for_date(config: &ProcessorConfig, date: &str) -> Result<RunSummary> {
    let mut sink = SlackSink::new(&config.webhook_url)?;
    process_logs(config, date, &mut sink)
}

/// The run loop against any sink; separate from [process_logs_for_date] so
/// tests can substitute a recording sink.
pub fn process_logs<S: NotifySink>(config: &ProcessorConfig, date: &str, sink: &mut S) -> Result<RunSummary> {
    let log_path = log_path_for_date(&config.log_dir, date);
    if !log_path.exists() {
        info!("no log file for {}: {}", date, log_path.display());
        return Ok(RunSummary::default());
    }
    info!("processing {}", log_path.display());

    let store = OffsetStore::for_log(&log_path);
    let offset = store.load();
    let delta = LogDelta::open(&log_path, offset)?;
    let new_size = delta.new_size;

    let mut summary = RunSummary::default();
    for line in delta.lines() {
        let line = line
            .with_context(|| format!("Error reading log file: {}", log_path.display()))?;
        summary.lines_read += 1;
        let record = match AccessRecord::parse(&line) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed record: {:#}: {}", e, line);
                summary.parse_errors += 1;
                continue;
            }
        };
        if record.is_server_error() {
            let event = ErrorEvent::from(record);
            match sink.notify(&event) {
                Ok(()) => summary.notifications_sent += 1,
                Err(e) => {
                    // one attempt per record per run, no retry, no rollback
                    error!("notification failed for {} {}: {:#}", event.status, event.uri, e);
                    summary.notify_failures += 1;
                }
            }
        }
    }

    // persisted only now, after the whole delta was processed
    store.save(new_size)?;
    summary.new_offset = new_size;
    info!("done: {} lines, {} parse errors, {} notifications sent, {} failed, offset {}",
        summary.lines_read, summary.parse_errors, summary.notifications_sent,
        summary.notify_failures, summary.new_offset);
    Ok(summary)
}
