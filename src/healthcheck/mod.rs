//! Module for the endpoint health check.
//!
//! One invocation performs a single GET against the target URL with a
//! bounded timeout. A non-2xx response or a transport error counts as DOWN
//! and posts an attachment-style alert to the configured webhook; a healthy
//! endpoint produces no notification at all.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
