// API client module: contains a small blocking HTTP client that posts
// one image to the inference endpoint per invocation. It is
// intentionally small and synchronous: the process blocks until the
// reply arrives or reqwest's default timeout fires, and no request is
// ever retried.
//
// Transport convention: multipart/form-data with the raw image bytes
// under a form field named `image`. This is the single request shape
// the backend accepts for all three task modes; the JSON-body variant
// is deliberately not implemented.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use tracing::debug;

use crate::source::ImageSource;

/// Simple API client holding a reqwest blocking client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

/// The raw reply of one inference request, before interpretation.
/// The body is kept as text; only a 200 reply is expected to carry a
/// parseable JSON body.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().context("Failed to build HTTP client")?;
        Ok(ApiClient { client })
    }

    /// The underlying blocking client, shared with `ImageSource` for
    /// downloading remote images.
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// POST the image to the endpoint and hand back status, reason
    /// phrase and body text. Interpretation of the body is the
    /// `interpret` module's job; a non-200 status is not an error at
    /// this layer.
    pub fn infer(&self, url: &str, source: &ImageSource) -> Result<RawResponse> {
        let part = multipart::Part::bytes(source.bytes().to_vec())
            .file_name(source.name().to_string())
            .mime_str("image/jpeg")
            .context("Failed to build multipart part")?;
        let form = multipart::Form::new().part("image", part);

        debug!(url, size = source.bytes().len(), "posting inference request");
        let res = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .context("Failed to send inference request")?;

        let status = res.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let body = res.text().unwrap_or_else(|_| String::new());
        debug!(status = status.as_u16(), "received inference response");

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
