//! Browser transport and API context.
//!
//! The server writes the API base URL into a `<meta>` tag; the client
//! reads it once and shares one [`ApiClient`] through context.

use std::future::Future;

use leptos::prelude::*;

use crate::core::api::{ApiClient, ApiError, ApiRequest, DEFAULT_API_BASE, RawResponse, Transport};
#[cfg(not(feature = "ssr"))]
use crate::core::api::Method;

/// Name of the meta tag carrying the API base URL
pub const API_META_NAME: &str = "edutalks-api";

pub type SiteApi = ApiClient<BrowserTransport>;

/// Client-side API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL rendered by the server, or the default
    pub fn from_document() -> Self {
        Self {
            base_url: crate::ui::platform::meta_content(API_META_NAME)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }
}

/// `fetch` via `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>> {
        async move {
            #[cfg(not(feature = "ssr"))]
            {
                use gloo_net::http::Request;

                let builder = match request.method {
                    Method::Get => Request::get(&request.url),
                    Method::Post => Request::post(&request.url),
                    Method::Put => Request::put(&request.url),
                    Method::Delete => Request::delete(&request.url),
                }
                .header("Accept", "application/json");

                let builder = match &request.bearer {
                    Some(token) => builder.header("Authorization", &token.header_value()),
                    None => builder,
                };

                let pending = match request.body {
                    Some(body) => builder.header("Content-Type", "application/json").body(body),
                    None => builder.build(),
                }
                .map_err(|e| ApiError::Network(e.to_string()))?;

                let response = pending
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;

                Ok(RawResponse { status, body })
            }

            #[cfg(feature = "ssr")]
            {
                Err(ApiError::Network(format!(
                    "{} {} is not available during server rendering",
                    request.method, request.url
                )))
            }
        }
    }
}

/// Provide the shared API client to the component tree
pub fn provide_api() -> SiteApi {
    let api = ApiClient::new(BrowserTransport, ApiConfig::from_document().base_url);
    provide_context(api.clone());
    api
}

pub fn use_api() -> SiteApi {
    expect_context::<SiteApi>()
}
