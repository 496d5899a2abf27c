//! Message schema and service descriptors for the music-club RPC services.
//!
//! Every message is a plain serde struct with `#[serde(default)]`, so a
//! peer that omits a field decodes it as the zero value. Field order is part
//! of the binary wire format: append new fields, never reorder.

pub mod auth;
pub mod concert;
pub mod participation;
pub mod song;
pub mod user;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protobuf-style package all services live in.
pub const PACKAGE: &str = "musicclub";

// ── Descriptors ───────────────────────────────────────────────────────────────

/// Identity of one remote method. Envelopes carry a `&'static` reference
/// to one of these, never a free-form string.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    /// Fully qualified service name, e.g. `musicclub.SongService`.
    pub service: &'static str,
    /// Method name as declared by the service, e.g. `GetSong`.
    pub name: &'static str,
}

impl MethodDescriptor {
    pub const fn new(service: &'static str, name: &'static str) -> Self {
        Self { service, name }
    }

    /// Request path relative to the base endpoint: `/<service>/<method>`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.name)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service, self.name)
    }
}

/// The set of methods one remote service declares.
#[derive(Debug)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub methods: &'static [&'static MethodDescriptor],
}

impl ServiceDescriptor {
    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor> {
        self.methods.iter().copied().find(|m| m.name == name)
    }
}

/// All five services, in registry order.
pub fn services() -> [&'static ServiceDescriptor; 5] {
    [
        &song::SERVICE,
        &concert::SERVICE,
        &participation::SERVICE,
        &auth::SERVICE,
        &user::SERVICE,
    ]
}

/// Resolve a request path (`/<service>/<method>`) back to its descriptor.
pub fn find_method(path: &str) -> Option<&'static MethodDescriptor> {
    let (service, method) = path.trim_start_matches('/').split_once('/')?;
    services()
        .into_iter()
        .find(|s| s.name == service)
        .and_then(|s| s.method(method))
}

// ── Well-known types ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn from_unix(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

/// Selects which fields an update touches. Empty = all updatable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}
