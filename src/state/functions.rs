//! The impls and functions
//!
use std::{fs, io::Write, path::{Path, PathBuf}};
use log::*;
use anyhow::{Context, Result};
use crate::state::OffsetStore;

impl OffsetStore {
    /// The state file lives next to the log file it tracks: `<log>.offset`.
    pub fn for_log(log_path: &Path) -> OffsetStore {
        let mut path = log_path.as_os_str().to_owned();
        path.push(".offset");
        OffsetStore { path: PathBuf::from(path) }
    }
    /// Returns the persisted offset.
    ///
    /// A missing state file means no run has completed yet and a corrupt one
    /// is downgraded to a warning; both return offset 0, so the whole file is
    /// (re)processed on the next run.
    pub fn load(&self) -> u64 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_e) => {
                debug!("no state file at {}, starting from offset 0", self.path.display());
                return 0;
            }
        };
        match contents.trim().parse::<u64>() {
            Ok(offset) => offset,
            Err(e) => {
                warn!("state file {} does not contain a valid offset ({}), resetting to 0", self.path.display(), e);
                0
            }
        }
    }
    /// Persists the offset, replacing any prior value. The file is synced
    /// before returning, so a subsequent load cannot observe a stale value.
    pub fn save(&self, offset: u64) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("Cannot create state file: {}", self.path.display()))?;
        file.write_all(offset.to_string().as_bytes())
            .with_context(|| format!("Error writing state file: {}", self.path.display()))?;
        file.sync_all()
            .with_context(|| format!("Error syncing state file: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_state_file_path_is_derived_from_log_path() {
        let store = OffsetStore::for_log(Path::new("/var/log/nginx/access-2025-08-29.log"));
        assert_eq!(store.path, PathBuf::from("/var/log/nginx/access-2025-08-29.log.offset"));
    }
    #[test]
    fn unit_load_missing_state_file_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        assert_eq!(store.load(), 0);
    }
    #[test]
    fn unit_load_corrupt_state_file_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        fs::write(&store.path, "not-a-number").unwrap();
        assert_eq!(store.load(), 0);
    }
    #[test]
    fn unit_load_negative_offset_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        fs::write(&store.path, "-42").unwrap();
        assert_eq!(store.load(), 0);
    }
    #[test]
    fn unit_save_then_load_returns_offset() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        store.save(12345).unwrap();
        assert_eq!(store.load(), 12345);
    }
    #[test]
    fn unit_save_replaces_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        store.save(100000).unwrap();
        store.save(7).unwrap();
        // the file is truncated on write, a shorter value must not leave
        // trailing digits of the old one behind
        assert_eq!(store.load(), 7);
    }
    #[test]
    fn unit_load_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = OffsetStore::for_log(&dir.path().join("access-2025-08-29.log"));
        fs::write(&store.path, "512\n").unwrap();
        assert_eq!(store.load(), 512);
    }
}
