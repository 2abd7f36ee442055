//! Module for parsing and classifying nginx JSON access log records.
//!
//! Each log line is one JSON object. Only the `status` field is mandatory;
//! everything else is optional and substituted with "-" when an [ErrorEvent]
//! is built, so the notification side never deals with absent values.
//!
//! A line that is not valid JSON, or whose status is not integer-coercible,
//! is a malformed record: the run loop logs it and moves on.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
