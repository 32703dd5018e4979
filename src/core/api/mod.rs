//! Boundary to the external REST API

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, ApiRequest, DEFAULT_API_BASE, Method, RawResponse, Transport};
pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
