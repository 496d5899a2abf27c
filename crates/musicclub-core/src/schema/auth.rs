//! AuthService messages.

use serde::{Deserialize, Serialize};

use super::user::{Permissions, User};
use super::{MethodDescriptor, ServiceDescriptor};

pub const SERVICE_NAME: &str = "musicclub.AuthService";

pub static LOGIN_WITH_TELEGRAM: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "LoginWithTelegram");
pub static GET_PROFILE: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "GetProfile");

pub static SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: SERVICE_NAME,
    methods: &[&LOGIN_WITH_TELEGRAM, &GET_PROFILE],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TgLoginRequest {
    pub tg_user_id: u64,
    /// Raw Telegram WebApp init data, forwarded for server-side verification.
    pub init_data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSession {
    pub access_token: String,
    /// Issued-at, unix seconds.
    pub iat: u64,
    /// Expiry, unix seconds.
    pub exp: u64,
    pub is_chat_member: bool,
    /// Set when the user still has to join the club chat.
    pub join_request_url: String,
    pub profile: Option<User>,
    pub permissions: Option<Permissions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileResponse {
    pub profile: Option<User>,
    pub permissions: Option<Permissions>,
}
