use std::sync::Arc;

use musicclub_core::schema::user::{
    self, GetUserRequest, ListUsersRequest, ListUsersResponse, UpdateUserRequest, User,
};

use crate::error::Error;
use crate::transport::Transport;

/// Client for `musicclub.UserService`.
#[derive(Debug, Clone)]
pub struct UserClient {
    transport: Arc<Transport>,
}

impl UserClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub async fn get_user(&self, request: GetUserRequest) -> Result<User, Error> {
        self.transport.unary(&user::GET_USER, &request).await
    }

    pub async fn list_users(&self, request: ListUsersRequest) -> Result<ListUsersResponse, Error> {
        self.transport.unary(&user::LIST_USERS, &request).await
    }

    pub async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error> {
        self.transport.unary(&user::UPDATE_USER, &request).await
    }
}
