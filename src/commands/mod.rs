//! REST API Bindings
//!
//! Frontend bindings to the backend collections, split into a
//! transport-independent request layer and a gloo-net transport.

mod client;
mod http;
mod request;

use std::fmt;

pub use client::{Mutation, ResourceClient};
pub use http::HttpTransport;
pub use request::{ApiRequest, Body, Method, Part};

/// Why a request did not yield a usable response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No HTTP response came back (offline, CORS, bad request setup)
    Network(String),
    /// The server answered with a non-2xx status
    Status { status: u16, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status { message, .. } => write!(f, "{}", message),
        }
    }
}

/// Something that can deliver an `ApiRequest` and return the response body
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + 'static {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError>;
}
