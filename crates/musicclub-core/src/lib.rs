//! musicclub-core — shared message types, wire codec, status codes and configuration.
//! The client and CLI crates depend on this one.

pub mod config;
pub mod schema;
pub mod status;
pub mod wire;

pub use schema::{MethodDescriptor, ServiceDescriptor};
pub use status::{Code, Status};
pub use wire::WireFormat;
