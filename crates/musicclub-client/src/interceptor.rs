//! Interceptor chain.
//!
//! Interceptors form an ordered chain of responsibility. Each one receives
//! the envelope together with a [`Next`] handle to the rest of the chain and
//! decides what to pass on. The last link is always the [`Network`].
//!
//! ```text
//! stub → Transport::unary → [i0] → [i1] → … → Network::send → server
//! ```
//!
//! The chain is composed once when the transport is built and never
//! changes afterwards, so concurrent calls share it without locking.

use std::sync::Arc;

use async_trait::async_trait;

use crate::envelope::{Envelope, Reply};
use crate::error::Error;
use crate::network::Network;

/// A request transform inserted into the call path.
///
/// Implementations hold no call-scoped state: one instance serves every
/// call of every stub, concurrently.
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn call(&self, envelope: Envelope, next: Next<'_>) -> Result<Reply, Error>;
}

/// The remainder of the chain after the current interceptor.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    rest: &'a [Arc<dyn Interceptor>],
    network: &'a dyn Network,
}

impl<'a> Next<'a> {
    /// Hand the envelope to the next interceptor, or to the network when
    /// the chain is exhausted. The result comes back unchanged.
    pub async fn run(self, envelope: Envelope) -> Result<Reply, Error> {
        match self.rest.split_first() {
            Some((head, rest)) => {
                head.call(
                    envelope,
                    Next {
                        rest,
                        network: self.network,
                    },
                )
                .await
            }
            None => self.network.send(envelope).await,
        }
    }
}

/// Ordered interceptors terminated by a network layer.
#[derive(Clone)]
pub struct Chain {
    interceptors: Vec<Arc<dyn Interceptor>>,
    network: Arc<dyn Network>,
}

impl Chain {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>, network: Arc<dyn Network>) -> Self {
        Self {
            interceptors,
            network,
        }
    }

    pub async fn call(&self, envelope: Envelope) -> Result<Reply, Error> {
        Next {
            rest: &self.interceptors,
            network: self.network.as_ref(),
        }
        .run(envelope)
        .await
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.interceptors
    }

    pub fn network(&self) -> &Arc<dyn Network> {
        &self.network
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fakes shared by the client's unit tests.

    use super::*;
    use parking_lot::Mutex;
    use reqwest::header::HeaderMap;

    /// Records every envelope it receives and answers with a fixed reply.
    #[derive(Default)]
    pub struct RecordingNetwork {
        pub seen: Mutex<Vec<Envelope>>,
        pub reply: Mutex<Option<Result<Reply, musicclub_core::Status>>>,
    }

    impl RecordingNetwork {
        pub fn replying(reply: Result<Reply, musicclub_core::Status>) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                reply: Mutex::new(Some(reply)),
            })
        }

        pub fn calls(&self) -> usize {
            self.seen.lock().len()
        }

        pub fn last_headers(&self) -> HeaderMap {
            self.seen
                .lock()
                .last()
                .map(|e| e.headers().clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl Network for RecordingNetwork {
        async fn send(&self, envelope: Envelope) -> Result<Reply, Error> {
            self.seen.lock().push(envelope);
            match self.reply.lock().clone() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(status)) => Err(Error::Status(status)),
                None => Ok(Reply::default()),
            }
        }
    }

    /// Appends its tag to `x-trace` so tests can observe chain order.
    pub struct Tag(pub &'static str);

    #[async_trait]
    impl Interceptor for Tag {
        async fn call(&self, mut envelope: Envelope, next: Next<'_>) -> Result<Reply, Error> {
            let trace = envelope
                .headers()
                .get("x-trace")
                .and_then(|v| v.to_str().ok())
                .map(|v| format!("{v},{}", self.0))
                .unwrap_or_else(|| self.0.to_string());
            envelope
                .headers_mut()
                .insert("x-trace", trace.parse().expect("ascii tag"));
            next.run(envelope).await
        }
    }
}
