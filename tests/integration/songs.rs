use crate::*;

async fn add(clients: &Clients, title: &str) -> Song {
    clients
        .song
        .create_song(CreateSongRequest {
            song: Some(Song {
                id: 0,
                title: title.to_string(),
                description: String::new(),
                link: format!("https://example.org/{title}"),
            }),
        })
        .await
        .expect("create should succeed")
}

async fn catalogue_round_trip(format: WireFormat) {
    let running = spawn_server().await;
    let clients = admin_clients(&running.base_url, format);

    let first = add(&clients, "Wonderwall").await;
    let second = add(&clients, "Creep").await;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let fetched = clients
        .song
        .get_song(GetSongRequest {
            name: musicclub_core::schema::song::song_name(second.id),
        })
        .await
        .expect("get should succeed");
    assert_eq!(fetched, second);

    let listed = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .expect("list should succeed");
    let titles: Vec<_> = listed.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Wonderwall", "Creep"]);

    clients
        .song
        .delete_song(DeleteSongRequest {
            name: musicclub_core::schema::song::song_name(first.id),
        })
        .await
        .expect("delete should succeed");

    let listed = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .expect("list should succeed");
    assert_eq!(listed.songs, vec![second]);
    assert_eq!(running.server.hits(), 6);
}

#[tokio::test]
async fn test_catalogue_over_binary() {
    catalogue_round_trip(WireFormat::Binary).await;
}

#[tokio::test]
async fn test_catalogue_over_text() {
    catalogue_round_trip(WireFormat::Text).await;
}

/// Page tokens walk the catalogue without gaps or repeats.
#[tokio::test]
async fn test_list_pages_through_catalogue() {
    let running = spawn_server().await;
    let clients = admin_clients(&running.base_url, WireFormat::Binary);
    for title in ["a", "b", "c", "d", "e"] {
        add(&clients, title).await;
    }

    let mut seen = Vec::new();
    let mut page_token = String::new();
    loop {
        let page = clients
            .song
            .list_songs(ListSongsRequest {
                page_size: 2,
                page_token: page_token.clone(),
            })
            .await
            .expect("list should succeed");
        assert!(page.songs.len() <= 2);
        seen.extend(page.songs.into_iter().map(|s| s.title));
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }
    assert_eq!(seen, ["a", "b", "c", "d", "e"]);
}

/// Concurrent calls from cloned registries all land on the same server.
#[tokio::test]
async fn test_concurrent_calls_share_transport() {
    let running = spawn_server().await;
    let clients = admin_clients(&running.base_url, WireFormat::Text);

    let mut tasks = Vec::new();
    for i in 0..8 {
        let clients = clients.clone();
        tasks.push(tokio::spawn(async move {
            add(&clients, &format!("song-{i}")).await
        }));
    }
    for task in tasks {
        task.await.expect("task panicked");
    }

    assert!(clients.shares_transport());
    let listed = clients
        .song
        .list_songs(ListSongsRequest::default())
        .await
        .expect("list should succeed");
    assert_eq!(listed.songs.len(), 8);
}
