use crate::*;

use musicclub_client::{CredentialError, NoCredential, SharedCredential};
use musicclub_core::Code;

/// A present token reaches the server as `Bearer <token>`.
#[tokio::test]
async fn test_token_sent_as_bearer_header() {
    let running = spawn_server().await;
    let credential = SharedCredential::new();
    credential.set(ADMIN_TOKEN);
    let clients = clients_for(&running.base_url, WireFormat::Binary, credential);

    let resp = clients.auth.get_profile().await.expect("profile should load");
    let profile = resp.profile.expect("profile present");
    assert_eq!(profile.display_name, ADMIN_TOKEN);
}

/// Without a token the request goes out with no authorization header.
#[tokio::test]
async fn test_missing_token_sends_no_header() {
    let running = spawn_server().await;
    let clients = clients_for(&running.base_url, WireFormat::Text, NoCredential);

    let err = clients.auth.get_profile().await.unwrap_err();
    assert_eq!(err.code(), Some(Code::Unauthenticated));
    assert_eq!(
        err.status().map(|s| s.message()),
        Some("missing authorization header")
    );
    assert_eq!(running.server.hits(), 1);
}

/// The token is read on every call, so login and logout apply immediately.
#[tokio::test]
async fn test_token_changes_apply_to_next_call() {
    let running = spawn_server().await;
    let credential = SharedCredential::new();
    let clients = clients_for(&running.base_url, WireFormat::Binary, credential.clone());

    let err = clients.auth.get_profile().await.unwrap_err();
    assert_eq!(err.code(), Some(Code::Unauthenticated));

    credential.set(ADMIN_TOKEN);
    clients.auth.get_profile().await.expect("logged in");

    credential.set("someone-else");
    let err = clients.auth.get_profile().await.unwrap_err();
    assert_eq!(err.code(), Some(Code::PermissionDenied));

    credential.clear();
    let err = clients.auth.get_profile().await.unwrap_err();
    assert_eq!(err.code(), Some(Code::Unauthenticated));
    assert_eq!(running.server.hits(), 4);
}

/// A failing credential source aborts the call before anything is sent.
#[tokio::test]
async fn test_credential_failure_never_reaches_server() {
    let running = spawn_server().await;
    let failing = || -> Result<Option<String>, CredentialError> {
        Err(CredentialError::new("session store locked"))
    };
    let clients = clients_for(&running.base_url, WireFormat::Binary, failing);

    let err = clients.auth.get_profile().await.unwrap_err();
    match err {
        musicclub_client::Error::Credential(e) => assert_eq!(e.message(), "session store locked"),
        other => panic!("expected credential error, got {other:?}"),
    }
    let err = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, musicclub_client::Error::Credential(_)));
    assert_eq!(running.server.hits(), 0);
}
