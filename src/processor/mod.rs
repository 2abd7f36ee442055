//! Module for the per-invocation run loop.
//!
//! One run is a single linear pass: resolve the dated log file, load the
//! persisted offset, read the new lines in file order, notify for every
//! server error record, then persist the end-of-file size observed at open
//! time as the new offset.
//!
//! The offset is written only after the whole batch has been processed. A
//! crash between a sent notification and the offset write therefore makes
//! the next run re-notify those lines: at-least-once delivery, preferred
//! over losing records.
//!
//! Per-line anomalies (malformed records, webhook failures) are logged and
//! skipped; a missing log file ends the run with nothing mutated.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
