//! Sailthru API client
//!
//! A library for signing and sending Sailthru API requests and for
//! verifying the postbacks Sailthru sends back.

pub mod api;
pub mod config;
pub mod horizon;
pub mod params;
pub mod postback;
pub mod signature;
pub mod transport;

pub use api::{ApiError, ApiResponse, Credentials, SailthruClient, ScheduleBlast};
pub use params::{ParamValue, Params};
