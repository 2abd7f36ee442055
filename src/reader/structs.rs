use std::{fs::File, io::{BufReader, Take}};

/// One bounded read of an access log: the lines between the effective start
/// offset and the file size observed at open time.
pub struct LogDelta {
    pub(crate) reader: Take<BufReader<File>>,
    /// File size at open time; becomes the next persisted offset once the
    /// whole delta has been processed.
    pub new_size: u64,
    /// Effective read start; equals the requested offset, or 0 after
    /// rotation correction.
    pub start_offset: u64,
}
