//! Per-call envelope passed through the interceptor chain.

use bytes::Bytes;
use musicclub_core::MethodDescriptor;
use reqwest::header::HeaderMap;

/// One outgoing call: method identity, encoded payload and headers.
///
/// Owned by exactly one call. Interceptors receive it by value and may edit
/// the headers before handing it on; once the network layer takes it the
/// headers are no longer reachable from the chain.
#[derive(Debug, Clone)]
pub struct Envelope {
    method: &'static MethodDescriptor,
    payload: Bytes,
    headers: HeaderMap,
}

impl Envelope {
    pub fn new(method: &'static MethodDescriptor, payload: impl Into<Bytes>) -> Self {
        Self {
            method,
            payload: payload.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn method(&self) -> &'static MethodDescriptor {
        self.method
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn into_parts(self) -> (&'static MethodDescriptor, Bytes, HeaderMap) {
        (self.method, self.payload, self.headers)
    }
}

/// Successful response as returned by the network layer, still encoded.
#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}
