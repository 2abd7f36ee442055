//! weblog_alert reads the nginx JSON access log for a given date, detects
//! server error records (status 500..599) appended since the previous run,
//! and forwards each one to a Slack incoming webhook.
//!
//! The only state that survives between runs is a byte offset per log file,
//! kept in a small state file next to the log. The offset is written after
//! the whole batch of new lines has been processed, so a crash between a
//! sent notification and the offset write makes the next run re-notify those
//! lines: delivery is at-least-once, never silently lost.
//!
//! Runs against the same log file must be serialized externally (one cron
//! invocation at a time); concurrent runs would race on the state file.
use clap::Parser;

pub mod state;
pub mod reader;
pub mod record;
pub mod sink;
pub mod processor;
pub mod healthcheck;
pub mod utility;

/// The commandline options.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Date (YYYY-MM-DD) of the access log to process. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
    /// Directory holding the access-<date>.log files. Defaults to LOG_DIR.
    #[arg(short, long)]
    pub log_dir: Option<String>,
    /// Incoming webhook URL for notifications. Defaults to SLACK_WEBHOOK_URL.
    #[arg(short, long)]
    pub webhook_url: Option<String>,
    /// Run the endpoint health check instead of processing logs.
    #[arg(long)]
    pub health_check: bool,
    /// URL checked by --health-check. Defaults to TARGET_URL.
    #[arg(long)]
    pub target_url: Option<String>,
}
