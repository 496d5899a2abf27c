//! UserService messages, plus the profile and permission types shared with
//! the auth service.

use serde::{Deserialize, Serialize};

use super::{FieldMask, MethodDescriptor, ServiceDescriptor};

pub const SERVICE_NAME: &str = "musicclub.UserService";

pub static GET_USER: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "GetUser");
pub static LIST_USERS: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "ListUsers");
pub static UPDATE_USER: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "UpdateUser");

pub static SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: SERVICE_NAME,
    methods: &[&GET_USER, &LIST_USERS, &UPDATE_USER],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub tg_id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub is_admin: bool,
    pub edit_own_songs: bool,
    pub edit_any_songs: bool,
    pub edit_events: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUsersRequest {
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub next_page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub user: Option<User>,
    pub update_mask: Option<FieldMask>,
}
