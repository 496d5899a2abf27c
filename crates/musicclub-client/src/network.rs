//! Network layer: the last link of every interceptor chain.

use std::time::Duration;

use async_trait::async_trait;
use musicclub_core::{MethodDescriptor, Status, WireFormat};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::envelope::{Envelope, Reply};
use crate::error::{Error, TransportError};

/// Performs the actual exchange for a fully intercepted envelope.
#[async_trait]
pub trait Network: Send + Sync {
    async fn send(&self, envelope: Envelope) -> Result<Reply, Error>;
}

/// Unary calls as HTTP POSTs: `<base_url>/<service>/<method>`.
///
/// The request body is the encoded payload; a 2xx response body is the
/// encoded reply. Any other status carries a JSON status object.
#[derive(Debug, Clone)]
pub struct HttpNetwork {
    client: reqwest::Client,
    base_url: String,
    wire_format: WireFormat,
}

impl HttpNetwork {
    /// `base_url` must already be normalised (no trailing `/`).
    pub fn new(
        base_url: impl Into<String>,
        wire_format: WireFormat,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            wire_format,
        })
    }

    pub fn url_for(&self, method: &MethodDescriptor) -> String {
        format!("{}{}", self.base_url, method.path())
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn send(&self, envelope: Envelope) -> Result<Reply, Error> {
        let (method, payload, mut headers) = envelope.into_parts();
        let content_type = HeaderValue::from_static(self.wire_format.content_type());
        headers.insert(CONTENT_TYPE, content_type.clone());
        headers.insert(ACCEPT, content_type);

        let url = self.url_for(method);
        tracing::debug!(%url, bytes = payload.len(), "sending request");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .body(payload)
            .send()
            .await
            .map_err(|e| status_from_reqwest(method, &e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| status_from_reqwest(method, &e))?;

        if status.is_success() {
            Ok(Reply { headers, body })
        } else {
            let status = Status::from_error_body(status.as_u16(), &body);
            tracing::debug!(%method, code = %status.code(), "remote returned error status");
            Err(status.into())
        }
    }
}

fn status_from_reqwest(method: &MethodDescriptor, err: &reqwest::Error) -> Status {
    if err.is_timeout() {
        Status::deadline_exceeded(format!("{method}: {err}"))
    } else if err.is_connect() || err.is_request() {
        Status::unavailable(format!("{method}: {err}"))
    } else {
        Status::internal(format!("{method}: {err}"))
    }
}
