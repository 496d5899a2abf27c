use std::sync::Arc;

use musicclub_core::schema::concert::{
    self, Concert, CreateConcertRequest, DeleteConcertRequest, GetConcertRequest,
    ListConcertsRequest, ListConcertsResponse, UpdateConcertRequest,
};
use musicclub_core::schema::Empty;

use crate::error::Error;
use crate::transport::Transport;

/// Client for `musicclub.ConcertService`.
#[derive(Debug, Clone)]
pub struct ConcertClient {
    transport: Arc<Transport>,
}

impl ConcertClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub async fn create_concert(&self, request: CreateConcertRequest) -> Result<Concert, Error> {
        self.transport.unary(&concert::CREATE_CONCERT, &request).await
    }

    pub async fn get_concert(&self, request: GetConcertRequest) -> Result<Concert, Error> {
        self.transport.unary(&concert::GET_CONCERT, &request).await
    }

    pub async fn list_concerts(
        &self,
        request: ListConcertsRequest,
    ) -> Result<ListConcertsResponse, Error> {
        self.transport.unary(&concert::LIST_CONCERTS, &request).await
    }

    pub async fn update_concert(&self, request: UpdateConcertRequest) -> Result<Concert, Error> {
        self.transport.unary(&concert::UPDATE_CONCERT, &request).await
    }

    pub async fn delete_concert(&self, request: DeleteConcertRequest) -> Result<Empty, Error> {
        self.transport.unary(&concert::DELETE_CONCERT, &request).await
    }
}
