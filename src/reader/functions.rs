//! The impls and functions
//!
use std::{fs::File, io, io::{BufRead, BufReader, Read, Seek, SeekFrom}, path::Path};
use log::*;
use anyhow::{Context, Result};
use crate::reader::LogDelta;

impl LogDelta {
    /// Opens the log file for reading from `from_offset` up to the current
    /// end of file. Fails when the file does not exist; the caller reports
    /// that and ends the run cleanly.
    pub fn open(path: &Path, from_offset: u64) -> Result<LogDelta> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open log file: {}", path.display()))?;
        let new_size = file.metadata()
            .with_context(|| format!("Cannot stat log file: {}", path.display()))?
            .len();
        let start_offset = if from_offset > new_size {
            info!("offset {} is past the end of {} ({} bytes): file was rotated, reading from the start",
                from_offset, path.display(), new_size);
            0
        } else {
            from_offset
        };
        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(start_offset))
            .with_context(|| format!("Cannot seek to offset {} in {}", start_offset, path.display()))?;
        Ok(LogDelta {
            reader: reader.take(new_size - start_offset),
            new_size,
            start_offset,
        })
    }
    /// The lines of the delta, in file order. Lines are split on the raw
    /// byte stream and decoded lossily, so bytes that are not valid UTF-8
    /// surface as a line that fails record parsing rather than ending the
    /// read.
    pub fn lines(self) -> impl Iterator<Item = io::Result<String>> {
        self.reader
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }
}
