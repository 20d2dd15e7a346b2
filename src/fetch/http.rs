//! HTTP icon fetching
//!
//! One shared `reqwest::Client` for connection reuse across all requests,
//! with a hard cap on response body size so a mislabelled candidate cannot
//! balloon memory.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;

/// Why an HTTP fetch produced no usable bytes
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("server answered {0}")]
    Status(u16),

    /// Response body exceeded the configured size cap
    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Shared HTTP client for the network loader
pub struct HttpFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Build the shared client
    ///
    /// # Arguments
    /// * `timeout` - Overall per-request timeout
    /// * `max_body_bytes` - Hard cap on accepted response body size
    /// * `user_agent` - UA string sent with every request
    pub fn new(timeout: Duration, max_body_bytes: usize, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            max_body_bytes,
        })
    }

    /// Fetch a URL and return its body bytes
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on non-success status, oversized bodies, or
    /// transport failures. Callers treat all of these as a loader miss.
    pub async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching icon bytes from {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Reject early when the server declares an oversized body.
        if let Some(length) = response.content_length()
            && length as usize > self.max_body_bytes
        {
            return Err(FetchError::TooLarge {
                limit: self.max_body_bytes,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.len() > self.max_body_bytes {
            return Err(FetchError::TooLarge {
                limit: self.max_body_bytes,
            });
        }

        Ok(bytes.to_vec())
    }
}
