use std::path::PathBuf;

/// Configuration for one run, constructed at invocation start. No state
/// beyond the persisted offset crosses run boundaries.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub log_dir: PathBuf,
    pub webhook_url: String,
}

/// Counters for one run, logged at the end of the pass.
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub parse_errors: u64,
    pub notifications_sent: u64,
    pub notify_failures: u64,
    pub new_offset: u64,
}
