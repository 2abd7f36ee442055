//! Module for reading the not-yet-processed tail of an access log file.
//!
//! A [LogDelta] covers the byte range between the persisted offset and the
//! file size observed at open time. Lines appended while the delta is being
//! consumed fall outside that range and are picked up by the next run.
//!
//! Rotation is detected here: a persisted offset larger than the current
//! file size means the file was replaced or truncated since the last run,
//! and reading restarts at byte 0 instead of seeking past end-of-file.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
