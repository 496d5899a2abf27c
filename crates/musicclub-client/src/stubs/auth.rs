use std::sync::Arc;

use musicclub_core::schema::auth::{self, AuthSession, ProfileResponse, TgLoginRequest};
use musicclub_core::schema::Empty;

use crate::error::Error;
use crate::transport::Transport;

/// Client for `musicclub.AuthService`.
///
/// The session returned by [`login_with_telegram`](Self::login_with_telegram)
/// carries the access token. Storing it where the transport's credential
/// source can find it is up to the caller.
#[derive(Debug, Clone)]
pub struct AuthClient {
    transport: Arc<Transport>,
}

impl AuthClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub async fn login_with_telegram(&self, request: TgLoginRequest) -> Result<AuthSession, Error> {
        self.transport.unary(&auth::LOGIN_WITH_TELEGRAM, &request).await
    }

    pub async fn get_profile(&self) -> Result<ProfileResponse, Error> {
        self.transport.unary(&auth::GET_PROFILE, &Empty {}).await
    }
}
