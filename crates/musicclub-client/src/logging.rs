//! Call logging interceptor.

use std::time::Instant;

use async_trait::async_trait;

use crate::envelope::{Envelope, Reply};
use crate::error::Error;
use crate::interceptor::{Interceptor, Next};

/// Logs every call's method, duration and outcome through `tracing`.
///
/// Completed calls log at info, failed ones at warn with the error. Place
/// it first in the chain to time the whole call including other
/// interceptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallLogger;

#[async_trait]
impl Interceptor for CallLogger {
    async fn call(&self, envelope: Envelope, next: Next<'_>) -> Result<Reply, Error> {
        let method = envelope.method();
        let start = Instant::now();

        let result = next.run(envelope).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(%method, ?elapsed, bytes = reply.body.len(), "call completed")
            }
            Err(e) => tracing::warn!(%method, ?elapsed, error = %e, "call failed"),
        }

        result
    }
}
