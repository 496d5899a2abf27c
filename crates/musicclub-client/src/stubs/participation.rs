use std::sync::Arc;

use musicclub_core::schema::participation::{
    self, CreateParticipationRequest, DeleteParticipationRequest, GetParticipationRequest,
    ListParticipationsRequest, ListParticipationsResponse, Participation,
    UpdateParticipationRequest,
};
use musicclub_core::schema::Empty;

use crate::error::Error;
use crate::transport::Transport;

/// Client for `musicclub.ParticipationService`.
///
/// Get and delete address a participation by its resource name; see
/// [`participation_name`](musicclub_core::schema::participation::participation_name).
#[derive(Debug, Clone)]
pub struct ParticipationClient {
    transport: Arc<Transport>,
}

impl ParticipationClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub async fn create_participation(
        &self,
        request: CreateParticipationRequest,
    ) -> Result<Participation, Error> {
        self.transport
            .unary(&participation::CREATE_PARTICIPATION, &request)
            .await
    }

    pub async fn get_participation(
        &self,
        request: GetParticipationRequest,
    ) -> Result<Participation, Error> {
        self.transport
            .unary(&participation::GET_PARTICIPATION, &request)
            .await
    }

    pub async fn list_participations(
        &self,
        request: ListParticipationsRequest,
    ) -> Result<ListParticipationsResponse, Error> {
        self.transport
            .unary(&participation::LIST_PARTICIPATIONS, &request)
            .await
    }

    pub async fn update_participation(
        &self,
        request: UpdateParticipationRequest,
    ) -> Result<Participation, Error> {
        self.transport
            .unary(&participation::UPDATE_PARTICIPATION, &request)
            .await
    }

    pub async fn delete_participation(
        &self,
        request: DeleteParticipationRequest,
    ) -> Result<Empty, Error> {
        self.transport
            .unary(&participation::DELETE_PARTICIPATION, &request)
            .await
    }
}
