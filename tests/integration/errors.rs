use std::time::Duration;

use crate::*;

use musicclub_client::Error;
use musicclub_core::Code;

/// Remote status codes surface unchanged, in both encodings.
#[tokio::test]
async fn test_remote_not_found_passes_through() {
    let running = spawn_server().await;
    for format in [WireFormat::Binary, WireFormat::Text] {
        let clients = admin_clients(&running.base_url, format);
        let err = clients
            .song
            .get_song(GetSongRequest {
                name: "404".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "format {format}");
        assert_eq!(err.status().map(|s| s.message()), Some("song 404 not found"));
    }
}

#[tokio::test]
async fn test_remote_invalid_argument_passes_through() {
    let running = spawn_server().await;
    let clients = admin_clients(&running.base_url, WireFormat::Text);
    let err = clients
        .song
        .create_song(CreateSongRequest {
            song: Some(Song::default()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));
}

/// Paths the server does not route come back as a mapped HTTP status.
#[tokio::test]
async fn test_unrouted_method_maps_http_status() {
    let running = spawn_server().await;
    let clients = admin_clients(&running.base_url, WireFormat::Binary);
    let err = clients
        .concert
        .list_concerts(Default::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::Unimplemented));
}

/// A server that went away is reported as unavailable, not retried.
#[tokio::test]
async fn test_stopped_server_is_unavailable() {
    let running = spawn_server().await;
    let base_url = running.base_url.clone();
    running.shutdown();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let transport = Transport::builder(&base_url)
        .timeout(Some(Duration::from_secs(5)))
        .build()
        .expect("transport should build");
    let clients = Clients::new(Arc::new(transport));
    let err = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status(_)), "got {err:?}");
    assert_eq!(err.code(), Some(Code::Unavailable));
}
