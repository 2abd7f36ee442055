use std::path::PathBuf;

/// Handle to the state file holding the last processed byte offset of one
/// log file.
#[derive(Debug, Clone)]
pub struct OffsetStore {
    pub path: PathBuf,
}
