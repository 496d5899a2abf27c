//! Bearer credential interceptor.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::credential::{CredentialError, CredentialSource};
use crate::envelope::{Envelope, Reply};
use crate::error::Error;
use crate::interceptor::{Interceptor, Next};

/// Attaches `Authorization: Bearer <token>` to every outgoing call.
///
/// The credential is read from the source on each call, before the
/// envelope moves on, so a token set between two calls is used by the
/// second one. With no token the envelope passes through untouched. A
/// failing source fails the call with its own error and nothing is sent.
pub struct BearerAuth<C> {
    source: C,
}

impl<C: CredentialSource> BearerAuth<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &C {
        &self.source
    }
}

#[async_trait]
impl<C: CredentialSource> Interceptor for BearerAuth<C> {
    async fn call(&self, mut envelope: Envelope, next: Next<'_>) -> Result<Reply, Error> {
        match self.source.current()? {
            Some(token) if !token.is_empty() => {
                envelope
                    .headers_mut()
                    .insert(AUTHORIZATION, bearer_header(&token)?);
            }
            _ => {}
        }
        next.run(envelope).await
    }
}

/// `Bearer <token>`, token verbatim. Marked sensitive so it never shows up
/// in debug output.
fn bearer_header(token: &str) -> Result<HeaderValue, CredentialError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
        CredentialError::with_source("credential is not a valid header value", e)
    })?;
    value.set_sensitive(true);
    Ok(value)
}
