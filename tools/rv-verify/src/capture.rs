//! Captured exchange file format.
//!
//! ```json
//! {
//!   "method": "GET",
//!   "path": "/v1/subscribers/login",
//!   "nonce": "MTIzNDU2Nzg5MGFi",
//!   "status": 200,
//!   "headers": { "X-Signature": "...", "X-RevenueCat-Request-Time": "1688066622299" },
//!   "body": "{...}"
//! }
//! ```

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use serde::Deserialize;

use rv_signing::{HttpRequest, HttpResponse};

#[derive(Debug, Deserialize)]
pub struct Capture {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Base64 nonce sent with the request
    #[serde(default)]
    pub nonce: Option<String>,
    pub status: u16,
    /// Sorted by name, so names differing only in case apply in a fixed order
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// `null` when the response had no body
    #[serde(default)]
    pub body: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

impl Capture {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("capture is not valid JSON")
    }

    pub fn request(&self) -> Result<HttpRequest> {
        let method = Method::from_bytes(self.method.as_bytes())
            .with_context(|| format!("invalid method {:?}", self.method))?;
        let nonce = self
            .nonce
            .as_deref()
            .map(|nonce| B64.decode(nonce).context("nonce is not base64"))
            .transpose()?;

        Ok(HttpRequest {
            method,
            path: self.path.clone(),
            nonce,
        })
    }

    pub fn response(&self) -> Result<HttpResponse> {
        let status = StatusCode::from_u16(self.status)
            .with_context(|| format!("invalid status {}", self.status))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            headers.append(
                HeaderName::try_from(name.as_str())
                    .with_context(|| format!("invalid header name {name:?}"))?,
                HeaderValue::try_from(value.as_str())
                    .with_context(|| format!("invalid value for header {name}"))?,
            );
        }

        Ok(HttpResponse {
            status,
            headers,
            body: self.body.as_ref().map(|body| body.as_bytes().to_vec()),
        })
    }
}
