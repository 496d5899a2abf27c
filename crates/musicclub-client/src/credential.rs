//! Credential accessors.
//!
//! Acquiring and storing a bearer token belongs to the application. The
//! client only needs a synchronous "current token, if any" lookup, which it
//! performs on every call. Nothing here caches a token on the client's behalf.

use std::sync::Arc;

use parking_lot::RwLock;

/// Synchronous source of the caller's bearer credential.
///
/// `Ok(None)` means unauthenticated. Implementations must not block on I/O
/// for long: the lookup runs inline on every call.
pub trait CredentialSource: Send + Sync {
    fn current(&self) -> Result<Option<String>, CredentialError>;
}

impl<F> CredentialSource for F
where
    F: Fn() -> Result<Option<String>, CredentialError> + Send + Sync,
{
    fn current(&self) -> Result<Option<String>, CredentialError> {
        self()
    }
}

/// Failure raised by a credential accessor. Propagated to the caller as-is.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CredentialError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl CredentialError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ── Sources ───────────────────────────────────────────────────────────────────

/// Always unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredential;

impl CredentialSource for NoCredential {
    fn current(&self) -> Result<Option<String>, CredentialError> {
        Ok(None)
    }
}

/// A fixed token, e.g. one passed on the command line.
#[derive(Clone)]
pub struct StaticCredential(String);

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticCredential(..)")
    }
}

impl CredentialSource for StaticCredential {
    fn current(&self) -> Result<Option<String>, CredentialError> {
        Ok(Some(self.0.clone()))
    }
}

/// Token cell shared between the application's login flow and the client.
///
/// Clones share the same cell, so a `set` after login is visible to the
/// very next call.
#[derive(Clone, Default)]
pub struct SharedCredential {
    token: Arc<RwLock<Option<String>>>,
}

impl SharedCredential {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }

    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for SharedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCredential")
            .field("is_set", &self.is_set())
            .finish()
    }
}

impl CredentialSource for SharedCredential {
    fn current(&self) -> Result<Option<String>, CredentialError> {
        Ok(self.token.read().clone())
    }
}

/// Reads an environment variable on every call. Unset means unauthenticated.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn current(&self) -> Result<Option<String>, CredentialError> {
        match std::env::var(&self.var) {
            Ok(token) => Ok(Some(token)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(CredentialError::with_source(
                format!("cannot read credential from ${}", self.var),
                e,
            )),
        }
    }
}
