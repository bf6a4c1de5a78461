//! Sailthru API client.
//!
//! This module provides:
//! - The signing, dispatching client ([`SailthruClient`])
//! - API credentials with a redacted `Debug` ([`Credentials`])
//! - Endpoint helpers (`send`, `set_email`, `schedule_blast`, ...)
//! - Response decoding ([`ApiResponse`])

mod client;
mod endpoints;
mod error;
mod response;

#[cfg(test)]
mod endpoints_tests;
#[cfg(test)]
mod mock;

pub use client::{Credentials, SailthruClient, USER_AGENT};
pub use endpoints::ScheduleBlast;
pub use error::ApiError;
pub use response::ApiResponse;
