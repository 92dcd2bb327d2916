//! reqwest-backed [`HttpTransport`].

use async_trait::async_trait;
use tracing::debug;

use shared::{
    config::PairingClientConfig,
    error::{PairingError, PairingResult},
};

use super::{HttpTransport, TransportRequest, TransportResponse};

/// Production transport built on a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeouts and user agent from `config`
    pub fn new(config: &PairingClientConfig) -> PairingResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                PairingError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client (custom TLS roots, proxies, ...)
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> PairingResult<TransportResponse> {
        let TransportRequest {
            method,
            url,
            bearer_token,
            body,
        } = request;
        let url_string = url.to_string();

        debug!(method = %method, url = %url_string, "Sending pairing request");

        let mut builder = self
            .http_client
            .request(method, url)
            .bearer_auth(bearer_token);

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&url_string, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url_string, e))?;

        debug!(
            url = %url_string,
            status = status,
            body_len = body.len(),
            "Pairing response received"
        );

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> PairingError {
    if err.is_timeout() {
        PairingError::Timeout { url: url.to_string() }
    } else {
        PairingError::NetworkError {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
