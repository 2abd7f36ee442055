//! Module for the durable byte offset kept per access log file.
//!
//! The offset marks how far into the log file previous runs have read. It is
//! stored as a decimal string in a state file next to the log file itself
//! (`access-<date>.log.offset`), so each dated log carries its own cursor.
//!
//! A missing or unreadable state file is never fatal: it degrades to offset
//! 0, which means the next run reprocesses the file from the start.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
