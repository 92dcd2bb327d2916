//! In-memory transport for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use shared::error::PairingResult;

use super::{HttpTransport, TransportRequest, TransportResponse};

type Responder = dyn Fn(&TransportRequest) -> PairingResult<TransportResponse> + Send + Sync;

/// Records every request and answers through a responder closure
pub(crate) struct MockTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&TransportRequest) -> PairingResult<TransportResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond_json(status: u16, body: Value) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(TransportResponse::new(status, body.clone())))
    }

    pub(crate) fn respond_raw(status: u16, body: &'static str) -> Self {
        Self::new(move |_| Ok(TransportResponse::new(status, body)))
    }

    pub(crate) fn respond_empty(status: u16) -> Self {
        Self::new(move |_| Ok(TransportResponse::empty(status)))
    }

    pub(crate) fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> PairingResult<TransportResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}
