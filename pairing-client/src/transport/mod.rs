//! # HTTP Transport
//!
//! The pairing client never talks to the network directly. Every call goes
//! through an [`HttpTransport`], which only has to carry one request and
//! hand back the raw status and body. Status validation and JSON decoding
//! are done here, by the helpers every endpoint shares:
//!
//! - [`post_json_with_response`] - POST a JSON body, decode a JSON reply
//! - [`get_json`] - GET, decode a JSON reply
//! - [`delete`] - DELETE, no reply body
//!
//! Retries, timeouts and connection pooling belong to the transport
//! implementation.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::ReqwestTransport;

use async_trait::async_trait;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use shared::{
    constants::MAX_ERROR_BODY_LEN,
    error::{PairingError, PairingResult},
};

/// A single request handed to the transport
#[derive(Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer_token: String,
    /// Sent as `application/json` when present
    pub body: Option<Value>,
}

impl std::fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("bearer_token", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Raw reply returned by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response without a body
    pub fn empty(status: u16) -> Self {
        Self::new(status, Vec::new())
    }
}

/// Something that can carry a pairing request over HTTP.
///
/// Implementations report only failures to complete the exchange
/// ([`PairingError::NetworkError`], [`PairingError::Timeout`]); any status
/// the service answers with is returned as a [`TransportResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> PairingResult<TransportResponse>;
}

// =============================================================================
// GENERIC JSON HELPERS
// =============================================================================

/// POST `body` as JSON and decode the reply as `T`
pub async fn post_json_with_response<B, T>(
    transport: &dyn HttpTransport,
    url: Url,
    body: &B,
    token: &str,
    expected_status: u16,
) -> PairingResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_value(body).map_err(|e| PairingError::EncodeError(e.to_string()))?;
    let response =
        exchange(transport, Method::POST, url, token, Some(body), expected_status).await?;
    decode(&response)
}

/// GET `url` and decode the reply as `T`
pub async fn get_json<T>(
    transport: &dyn HttpTransport,
    url: Url,
    token: &str,
    expected_status: u16,
) -> PairingResult<T>
where
    T: DeserializeOwned,
{
    let response = exchange(transport, Method::GET, url, token, None, expected_status).await?;
    decode(&response)
}

/// DELETE `url`, ignoring any reply body
pub async fn delete(
    transport: &dyn HttpTransport,
    url: Url,
    token: &str,
    expected_status: u16,
) -> PairingResult<()> {
    exchange(transport, Method::DELETE, url, token, None, expected_status).await?;
    Ok(())
}

async fn exchange(
    transport: &dyn HttpTransport,
    method: Method,
    url: Url,
    token: &str,
    body: Option<Value>,
    expected_status: u16,
) -> PairingResult<TransportResponse> {
    let url_string = url.to_string();

    let response = transport
        .send(TransportRequest {
            method,
            url,
            bearer_token: token.to_string(),
            body,
        })
        .await?;

    if response.status != expected_status {
        return Err(PairingError::UnexpectedStatus {
            url: url_string,
            expected: expected_status,
            actual: response.status,
            body: truncate_body(&response.body),
        });
    }

    Ok(response)
}

fn decode<T: DeserializeOwned>(response: &TransportResponse) -> PairingResult<T> {
    serde_json::from_slice(&response.body).map_err(|e| PairingError::DecodeError(e.to_string()))
}

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_ERROR_BODY_LEN {
        return text.into_owned();
    }

    let mut end = MAX_ERROR_BODY_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Reply {
        value: String,
    }

    fn url() -> Url {
        Url::parse("http://localhost:4003/v1/test/agent/devices").unwrap()
    }

    #[tokio::test]
    async fn test_post_sends_json_and_bearer() {
        let transport = MockTransport::respond_json(201, json!({ "value": "ok" }));

        let reply: Reply =
            post_json_with_response(&transport, url(), &json!({ "a": 1 }), "tok", 201)
                .await
                .unwrap();
        assert_eq!(reply.value, "ok");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].bearer_token, "tok");
        assert_eq!(requests[0].body, Some(json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn test_unexpected_status_is_transport_error() {
        let transport =
            MockTransport::respond_json(409, json!({ "errors": { "detail": "Conflict" } }));

        let err = get_json::<Reply>(&transport, url(), "tok", 200).await.unwrap_err();
        match err {
            PairingError::UnexpectedStatus { expected, actual, body, .. } => {
                assert_eq!(expected, 200);
                assert_eq!(actual, 409);
                assert!(body.contains("Conflict"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let transport = MockTransport::respond_raw(200, "<html>gateway</html>");

        let err = get_json::<Reply>(&transport, url(), "tok", 200).await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let transport = MockTransport::respond_raw(204, "not json");

        delete(&transport, url(), "tok", 204).await.unwrap();
        assert_eq!(transport.requests()[0].method, Method::DELETE);
        assert_eq!(transport.requests()[0].body, None);
    }

    #[tokio::test]
    async fn test_transport_failure_is_propagated() {
        let transport = MockTransport::new(|request| {
            Err(PairingError::NetworkError {
                url: request.url.to_string(),
                reason: "connection refused".into(),
            })
        });

        let err = delete(&transport, url(), "tok", 204).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_truncate_body() {
        let long = "é".repeat(MAX_ERROR_BODY_LEN);
        let truncated = truncate_body(long.as_bytes());
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + 3);

        assert_eq!(truncate_body(b"short"), "short");
    }

    #[test]
    fn test_debug_redacts_token() {
        let request = TransportRequest {
            method: Method::GET,
            url: url(),
            bearer_token: "super-secret".into(),
            body: None,
        };
        let printed = format!("{request:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
