//! Typed call stubs, one per remote service.
//!
//! A stub is nothing but a handle on the shared [`Transport`]: cloning one
//! is cheap and two calls on the same stub share no state.
//!
//! [`Transport`]: crate::transport::Transport

mod auth;
mod concert;
mod participation;
mod song;
mod user;

pub use auth::AuthClient;
pub use concert::ConcertClient;
pub use participation::ParticipationClient;
pub use song::SongClient;
pub use user::UserClient;
