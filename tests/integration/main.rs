//! musicclub integration test harness.
//!
//! Every test starts its own in-process club server on an ephemeral
//! loopback port and talks to it over real HTTP through the client
//! facade. Nothing outside the test process is required:
//!
//!   cargo test --test integration
//!
//! The server keeps an in-memory song catalogue, echoes the caller's
//! `Authorization` header back through `AuthService/GetProfile`, and
//! answers every request in the wire format the request used.

mod auth;
mod errors;
mod songs;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::net::TcpListener;

use musicclub_client::{BearerAuth, Clients, CredentialSource, Transport};
use musicclub_core::schema::auth::ProfileResponse;
use musicclub_core::schema::song::{
    CreateSongRequest, DeleteSongRequest, GetSongRequest, ListSongsRequest, ListSongsResponse,
    Song,
};
use musicclub_core::schema::user::User;
use musicclub_core::schema::Empty;
use musicclub_core::{Status, WireFormat};

// ── Harness ───────────────────────────────────────────────────────────────────

/// The token that `GetProfile` treats as belonging to an admin.
pub const ADMIN_TOKEN: &str = "admin-token";

/// Shared state of one fake club server.
#[derive(Clone, Default)]
pub struct ClubServer {
    songs: Arc<Mutex<BTreeMap<u64, Song>>>,
    next_id: Arc<AtomicUsize>,
    hits: Arc<AtomicUsize>,
}

impl ClubServer {
    /// Number of requests the server has received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

/// A running server and the base URL it listens on.
pub struct Running {
    pub server: ClubServer,
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Running {
    /// Stop accepting connections.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Bind `127.0.0.1:0` and serve the fake club until the test ends.
pub async fn spawn_server() -> Running {
    let server = ClubServer::default();
    let app = Router::new()
        .route("/musicclub.SongService/CreateSong", post(create_song))
        .route("/musicclub.SongService/GetSong", post(get_song))
        .route("/musicclub.SongService/ListSongs", post(list_songs))
        .route("/musicclub.SongService/DeleteSong", post(delete_song))
        .route("/musicclub.AuthService/GetProfile", post(get_profile))
        .with_state(server.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("club server failed");
    });

    Running {
        server,
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// Clients bound to `base_url` with the bearer interceptor over `credential`.
pub fn clients_for<C>(base_url: &str, format: WireFormat, credential: C) -> Clients
where
    C: CredentialSource + 'static,
{
    let transport = Transport::builder(base_url)
        .wire_format(format)
        .interceptor(BearerAuth::new(credential))
        .build()
        .expect("transport should build");
    Clients::new(Arc::new(transport))
}

/// Clients carrying the admin token.
pub fn admin_clients(base_url: &str, format: WireFormat) -> Clients {
    clients_for(base_url, format, musicclub_client::StaticCredential::new(ADMIN_TOKEN))
}

// ── Server codec ──────────────────────────────────────────────────────────────

fn request_format(headers: &HeaderMap) -> WireFormat {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(WireFormat::from_content_type)
        .unwrap_or_default()
}

fn decode<T: DeserializeOwned>(format: WireFormat, body: &[u8]) -> Result<T, Response> {
    format
        .decode(body)
        .map_err(|e| fail(Status::invalid_argument(format!("bad request body: {e}"))))
}

fn reply<T: Serialize>(format: WireFormat, message: &T) -> Response {
    match format.encode(message) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, format.content_type())],
            body,
        )
            .into_response(),
        Err(e) => fail(Status::internal(e.to_string())),
    }
}

fn fail(status: Status) -> Response {
    let code = StatusCode::from_u16(status.code().http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        code,
        [(header::CONTENT_TYPE, "application/json")],
        status.to_error_body(),
    )
        .into_response()
}

fn parse_id(name: &str) -> Result<u64, Response> {
    name.parse()
        .map_err(|_| fail(Status::invalid_argument(format!("invalid song name {name:?}"))))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn create_song(State(s): State<ClubServer>, headers: HeaderMap, body: Bytes) -> Response {
    s.hit();
    let format = request_format(&headers);
    let req: CreateSongRequest = match decode(format, &body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let Some(mut song) = req.song else {
        return fail(Status::invalid_argument("song is required"));
    };
    if song.title.trim().is_empty() {
        return fail(Status::invalid_argument("title is required"));
    }
    song.id = s.next_id.fetch_add(1, Ordering::SeqCst) as u64 + 1;
    s.songs.lock().unwrap().insert(song.id, song.clone());
    reply(format, &song)
}

async fn get_song(State(s): State<ClubServer>, headers: HeaderMap, body: Bytes) -> Response {
    s.hit();
    let format = request_format(&headers);
    let result = decode::<GetSongRequest>(format, &body).and_then(|req| parse_id(&req.name));
    let id = match result {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match s.songs.lock().unwrap().get(&id) {
        Some(song) => reply(format, song),
        None => fail(Status::not_found(format!("song {id} not found"))),
    }
}

async fn list_songs(State(s): State<ClubServer>, headers: HeaderMap, body: Bytes) -> Response {
    s.hit();
    let format = request_format(&headers);
    let req: ListSongsRequest = match decode(format, &body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let after: u64 = req.page_token.parse().unwrap_or(0);
    let limit = if req.page_size > 0 {
        req.page_size as usize
    } else {
        usize::MAX
    };

    let songs = s.songs.lock().unwrap();
    let page: Vec<Song> = songs
        .range(after + 1..)
        .take(limit)
        .map(|(_, song)| song.clone())
        .collect();
    let next_page_token = match page.last() {
        Some(last) if songs.range(last.id + 1..).next().is_some() => last.id.to_string(),
        _ => String::new(),
    };
    reply(
        format,
        &ListSongsResponse {
            songs: page,
            next_page_token,
        },
    )
}

async fn delete_song(State(s): State<ClubServer>, headers: HeaderMap, body: Bytes) -> Response {
    s.hit();
    let format = request_format(&headers);
    let result = decode::<DeleteSongRequest>(format, &body).and_then(|req| parse_id(&req.name));
    let id = match result {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match s.songs.lock().unwrap().remove(&id) {
        Some(_) => reply(format, &Empty {}),
        None => fail(Status::not_found(format!("song {id} not found"))),
    }
}

/// Echoes the bearer token as the profile's display name.
async fn get_profile(State(s): State<ClubServer>, headers: HeaderMap, body: Bytes) -> Response {
    s.hit();
    let format = request_format(&headers);
    if let Err(resp) = decode::<Empty>(format, &body) {
        return resp;
    }
    let Some(auth) = headers.get(header::AUTHORIZATION) else {
        return fail(Status::unauthenticated("missing authorization header"));
    };
    let Some(token) = auth.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) else {
        return fail(Status::unauthenticated("malformed authorization header"));
    };
    if token != ADMIN_TOKEN {
        return fail(Status::permission_denied(format!("unknown token {token}")));
    }
    let profile = User {
        id: "u-1".to_string(),
        tg_id: 1001,
        username: "admin".to_string(),
        display_name: token.to_string(),
        avatar_url: String::new(),
    };
    reply(
        format,
        &ProfileResponse {
            profile: Some(profile),
            permissions: None,
        },
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The harness itself: a fresh server answers and counts requests.
#[tokio::test]
async fn test_server_starts_and_counts_hits() {
    let running = spawn_server().await;
    let clients = clients_for(
        &running.base_url,
        WireFormat::Text,
        musicclub_client::NoCredential,
    );

    let resp = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .expect("empty catalogue should list");
    assert!(resp.songs.is_empty());
    assert!(resp.next_page_token.is_empty());
    assert_eq!(running.server.hits(), 1);
}
