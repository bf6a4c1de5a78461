//! HTTP transport layer.
//!
//! This module provides:
//! - Request and response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction used by the API layer ([`HttpClient`])
//! - The production client backed by reqwest ([`ReqwestClient`])

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{FORM_CONTENT_TYPE, HttpClient, HttpRequest, HttpResponse};
