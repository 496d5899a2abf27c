//! SongService messages.

use serde::{Deserialize, Serialize};

use super::{FieldMask, MethodDescriptor, ServiceDescriptor};

pub const SERVICE_NAME: &str = "musicclub.SongService";

pub static CREATE_SONG: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "CreateSong");
pub static GET_SONG: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "GetSong");
pub static LIST_SONGS: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "ListSongs");
pub static UPDATE_SONG: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "UpdateSong");
pub static DELETE_SONG: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "DeleteSong");

pub static SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: SERVICE_NAME,
    methods: &[&CREATE_SONG, &GET_SONG, &LIST_SONGS, &UPDATE_SONG, &DELETE_SONG],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSongRequest {
    pub song: Option<Song>,
}

/// `name` is the decimal song id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSongRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSongsRequest {
    /// <= 0 lets the server pick its default page size.
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSongsResponse {
    pub songs: Vec<Song>,
    pub next_page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSongRequest {
    pub song: Option<Song>,
    pub update_mask: Option<FieldMask>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSongRequest {
    pub name: String,
}

/// Resource name of a song.
pub fn song_name(id: u64) -> String {
    id.to_string()
}
