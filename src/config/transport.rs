//! Fetching raw settings documents.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::TransportError;

/// Fetches the raw bytes stored at a source address.
///
/// Authentication, headers and timeouts belong to the implementation, not
/// to the settings service.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, TransportError>;
}

/// Fetches sources with a single HTTP GET.
///
/// Relative addresses such as `/config.json` are joined onto the base URL.
/// No timeout is applied beyond what the wrapped client is configured with.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<Url>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the URL that relative source addresses are resolved against.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn resolve_url(&self, address: &str) -> Result<Url, TransportError> {
        let invalid = |source| TransportError::InvalidAddress {
            address: address.to_string(),
            source,
        };

        match Url::parse(address) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(address).map_err(|e| invalid(Some(e))),
                None => Err(invalid(None)),
            },
            Err(e) => Err(invalid(Some(e))),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.resolve_url(address)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
