//! Error types for client construction and calls.

use musicclub_core::wire::WireError;
use musicclub_core::{Code, MethodDescriptor, Status};

use crate::credential::CredentialError;

/// A failed call.
///
/// Nothing here is retried or translated: a credential failure is the
/// accessor's own error, and a [`Status`] is exactly what the transport or
/// the server reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential accessor failed; the call never reached the network.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Transport-level failure or a status returned by the remote service.
    #[error(transparent)]
    Status(#[from] Status),

    #[error("failed to encode request for {method}: {source}")]
    Encode {
        method: &'static MethodDescriptor,
        source: WireError,
    },

    #[error("failed to decode response of {method}: {source}")]
    Decode {
        method: &'static MethodDescriptor,
        source: WireError,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("process-wide clients are already initialized")]
    AlreadyInitialized,

    #[error("process-wide clients are not initialized")]
    NotInitialized,
}

impl Error {
    pub fn status(&self) -> Option<&Status> {
        match self {
            Error::Status(status) => Some(status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<Code> {
        self.status().map(Status::code)
    }
}

/// Failure to construct a transport. Raised once at startup, never per call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
