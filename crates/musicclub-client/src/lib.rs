//! musicclub-client — typed call stubs for the music-club RPC services.
//!
//! One [`Transport`] is built per process and shared by every stub. Each
//! call runs through the transport's interceptor [`Chain`] before it reaches
//! the [`Network`]; [`BearerAuth`] is the interceptor that attaches the
//! caller's credential.
//!
//! ```no_run
//! use musicclub_client::{Clients, SharedCredential};
//! use musicclub_core::config::ClientConfig;
//! use musicclub_core::schema::song::ListSongsRequest;
//!
//! # async fn demo() -> Result<(), musicclub_client::Error> {
//! let credential = SharedCredential::new();
//! let clients = Clients::connect(&ClientConfig::load().unwrap_or_default(), credential.clone())?;
//!
//! credential.set("abc123");
//! let page = clients.song.list_songs(ListSongsRequest::default()).await?;
//! println!("{} songs", page.songs.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod global;
pub mod interceptor;
pub mod logging;
pub mod network;
pub mod registry;
pub mod stubs;
pub mod transport;

pub use auth::BearerAuth;
pub use credential::{
    CredentialError, CredentialSource, EnvCredential, NoCredential, SharedCredential,
    StaticCredential,
};
pub use envelope::{Envelope, Reply};
pub use error::{Error, TransportError};
pub use interceptor::{Chain, Interceptor, Next};
pub use logging::CallLogger;
pub use network::{HttpNetwork, Network};
pub use registry::Clients;
pub use stubs::{AuthClient, ConcertClient, ParticipationClient, SongClient, UserClient};
pub use transport::{Transport, TransportBuilder};

/// Result type for client calls.
pub type Result<T, E = Error> = std::result::Result<T, E>;
