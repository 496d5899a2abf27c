//! The shared transport every stub calls through.
//!
//! A transport is built once, at startup, from a base endpoint, a wire
//! format and an ordered interceptor list. It is immutable afterwards and is
//! shared as `Arc<Transport>`; building a second one means a second
//! connection pool and a second interceptor chain.

use std::sync::Arc;
use std::time::Duration;

use musicclub_core::config::{ClientConfig, DEFAULT_BASE_URL};
use musicclub_core::{MethodDescriptor, WireFormat};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::{Error, TransportError};
use crate::interceptor::{Chain, Interceptor};
use crate::network::{HttpNetwork, Network};

pub struct Transport {
    base_url: String,
    wire_format: WireFormat,
    chain: Chain,
}

impl Transport {
    pub fn builder(base_url: impl Into<String>) -> TransportBuilder {
        TransportBuilder::new(base_url)
    }

    /// Builder preloaded with the endpoint section of `config`.
    pub fn from_config(config: &ClientConfig) -> TransportBuilder {
        let endpoint = &config.endpoint;
        TransportBuilder::new(endpoint.base_url.clone())
            .wire_format(endpoint.wire_format)
            .timeout(endpoint.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn interceptor_count(&self) -> usize {
        self.chain.len()
    }

    /// Perform one unary call.
    ///
    /// Encodes the request, runs the envelope through the interceptor chain
    /// and decodes the reply. Failures surface unchanged; nothing is retried.
    pub async fn unary<Req, Resp>(
        &self,
        method: &'static MethodDescriptor,
        request: &Req,
    ) -> Result<Resp, Error>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let payload = self
            .wire_format
            .encode(request)
            .map_err(|source| Error::Encode { method, source })?;

        tracing::debug!(%method, format = %self.wire_format, "dispatching call");
        let reply = self.chain.call(Envelope::new(method, payload)).await?;

        // Trust the reply's own content type when it names a known format.
        let format = reply
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(WireFormat::from_content_type)
            .unwrap_or(self.wire_format);

        format
            .decode(&reply.body)
            .map_err(|source| Error::Decode { method, source })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("wire_format", &self.wire_format)
            .field("interceptors", &self.chain.len())
            .finish()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct TransportBuilder {
    base_url: String,
    wire_format: WireFormat,
    timeout: Option<Duration>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    network: Option<Arc<dyn Network>>,
}

impl TransportBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            wire_format: WireFormat::Binary,
            timeout: None,
            interceptors: Vec::new(),
            network: None,
        }
    }

    pub fn wire_format(mut self, format: WireFormat) -> Self {
        self.wire_format = format;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append an interceptor. Interceptors run in the order they are added.
    pub fn interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn shared_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Replace the HTTP network layer, e.g. with an in-memory fake.
    pub fn network(mut self, network: Arc<dyn Network>) -> Self {
        self.network = Some(network);
        self
    }

    pub fn build(self) -> Result<Transport, TransportError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let network = match self.network {
            Some(network) => network,
            None => Arc::new(HttpNetwork::new(
                base_url.clone(),
                self.wire_format,
                self.timeout,
            )?),
        };

        tracing::info!(
            base_url = %base_url,
            format = %self.wire_format,
            interceptors = self.interceptors.len(),
            "transport ready"
        );

        Ok(Transport {
            base_url,
            wire_format: self.wire_format,
            chain: Chain::new(self.interceptors, network),
        })
    }
}

/// Validate an endpoint and strip trailing slashes. Blank input selects
/// the default development endpoint.
pub fn normalize_base_url(raw: &str) -> Result<String, TransportError> {
    let raw = raw.trim();
    let raw = if raw.is_empty() { DEFAULT_BASE_URL } else { raw };

    let invalid = |reason: String| TransportError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };

    let url = reqwest::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
