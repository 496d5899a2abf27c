use std::sync::Arc;

use musicclub_core::schema::song::{
    self, CreateSongRequest, DeleteSongRequest, GetSongRequest, ListSongsRequest,
    ListSongsResponse, Song, UpdateSongRequest,
};
use musicclub_core::schema::Empty;

use crate::error::Error;
use crate::transport::Transport;

/// Client for `musicclub.SongService`.
#[derive(Debug, Clone)]
pub struct SongClient {
    transport: Arc<Transport>,
}

impl SongClient {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub async fn create_song(&self, request: CreateSongRequest) -> Result<Song, Error> {
        self.transport.unary(&song::CREATE_SONG, &request).await
    }

    pub async fn get_song(&self, request: GetSongRequest) -> Result<Song, Error> {
        self.transport.unary(&song::GET_SONG, &request).await
    }

    pub async fn list_songs(&self, request: ListSongsRequest) -> Result<ListSongsResponse, Error> {
        self.transport.unary(&song::LIST_SONGS, &request).await
    }

    /// Fields named in `update_mask` are replaced; an empty mask replaces
    /// title, description and link.
    pub async fn update_song(&self, request: UpdateSongRequest) -> Result<Song, Error> {
        self.transport.unary(&song::UPDATE_SONG, &request).await
    }

    pub async fn delete_song(&self, request: DeleteSongRequest) -> Result<Empty, Error> {
        self.transport.unary(&song::DELETE_SONG, &request).await
    }
}
