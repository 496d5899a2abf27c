//! Payload encodings used on the wire.
//!
//! The message schema itself is owned by [`crate::schema`]; this module only
//! turns a message into body bytes and back. Both ends must agree on the
//! format, which travels as the `content-type` header.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body encoding for request and response payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// Compact binary encoding (bincode).
    #[default]
    Binary,
    /// JSON text, useful when inspecting traffic by hand.
    Text,
}

pub const BINARY_CONTENT_TYPE: &str = "application/octet-stream";
pub const TEXT_CONTENT_TYPE: &str = "application/json";

impl WireFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            WireFormat::Binary => BINARY_CONTENT_TYPE,
            WireFormat::Text => TEXT_CONTENT_TYPE,
        }
    }

    /// Resolve a `content-type` header value. Parameters such as
    /// `; charset=utf-8` are ignored.
    pub fn from_content_type(value: &str) -> Option<WireFormat> {
        let essence = value.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(BINARY_CONTENT_TYPE) {
            Some(WireFormat::Binary)
        } else if essence.eq_ignore_ascii_case(TEXT_CONTENT_TYPE) {
            Some(WireFormat::Text)
        } else {
            None
        }
    }

    pub fn encode<T: Serialize + ?Sized>(self, message: &T) -> Result<Vec<u8>, WireError> {
        match self {
            WireFormat::Binary => bincode::serialize(message).map_err(WireError::Binary),
            WireFormat::Text => serde_json::to_vec(message).map_err(WireError::Text),
        }
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, WireError> {
        match self {
            WireFormat::Binary => bincode::deserialize(bytes).map_err(WireError::Binary),
            WireFormat::Text => serde_json::from_slice(bytes).map_err(WireError::Text),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Binary => f.write_str("binary"),
            WireFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "proto" => Ok(WireFormat::Binary),
            "text" | "json" => Ok(WireFormat::Text),
            other => Err(WireError::UnknownFormat(other.to_string())),
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("binary codec: {0}")]
    Binary(bincode::Error),
    #[error("text codec: {0}")]
    Text(serde_json::Error),
    #[error("unknown wire format: {0}")]
    UnknownFormat(String),
}
