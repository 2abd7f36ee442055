//! Module for delivering notifications to a Slack incoming webhook.
//!
//! The run loop only sees the [NotifySink] trait: one delivery attempt per
//! event, returning success or failure. There is no queueing and no retry;
//! a failed delivery is logged by the caller and the run continues.
//!
//! [SlackSink] posts one attachment-style message per server error record.
//! The HTTP client carries a timeout so a hung webhook cannot stall the run.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
