//! Song catalogue commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use musicclub_client::Clients;
use musicclub_core::schema::song::{
    song_name, CreateSongRequest, DeleteSongRequest, GetSongRequest, ListSongsRequest, Song,
};

use super::client::{header, or_dash};

#[derive(Subcommand)]
pub enum SongsCommand {
    /// List songs.
    List {
        /// Page size; 0 lets the server decide.
        #[arg(long, default_value_t = 0)]
        page_size: i32,
    },
    /// Show one song.
    Get { id: u64 },
    /// Add a song to the catalogue.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        link: String,
    },
    /// Remove a song.
    Delete { id: u64 },
}

pub async fn run(clients: &Clients, command: SongsCommand) -> Result<()> {
    match command {
        SongsCommand::List { page_size } => cmd_list(clients, page_size).await,
        SongsCommand::Get { id } => cmd_get(clients, id).await,
        SongsCommand::Add {
            title,
            description,
            link,
        } => cmd_add(clients, title, description, link).await,
        SongsCommand::Delete { id } => cmd_delete(clients, id).await,
    }
}

async fn cmd_list(clients: &Clients, page_size: i32) -> Result<()> {
    let resp = clients
        .song
        .list_songs(ListSongsRequest {
            page_size,
            ..Default::default()
        })
        .await
        .context("ListSongs failed")?;

    if resp.songs.is_empty() {
        println!("No songs yet.");
        return Ok(());
    }

    header(&format!("Songs ({})", resp.songs.len()));
    for song in &resp.songs {
        print_song(song);
    }
    if !resp.next_page_token.is_empty() {
        println!("\n  More results: page token {}", resp.next_page_token);
    }
    Ok(())
}

async fn cmd_get(clients: &Clients, id: u64) -> Result<()> {
    let song = clients
        .song
        .get_song(GetSongRequest {
            name: song_name(id),
        })
        .await
        .with_context(|| format!("GetSong {id} failed"))?;
    print_song(&song);
    Ok(())
}

async fn cmd_add(
    clients: &Clients,
    title: String,
    description: String,
    link: String,
) -> Result<()> {
    let song = clients
        .song
        .create_song(CreateSongRequest {
            song: Some(Song {
                id: 0,
                title,
                description,
                link,
            }),
        })
        .await
        .context("CreateSong failed")?;
    println!("Song created:");
    print_song(&song);
    Ok(())
}

async fn cmd_delete(clients: &Clients, id: u64) -> Result<()> {
    clients
        .song
        .delete_song(DeleteSongRequest {
            name: song_name(id),
        })
        .await
        .with_context(|| format!("DeleteSong {id} failed"))?;
    println!("Deleted song {id}.");
    Ok(())
}

fn print_song(song: &Song) {
    println!("  ┌─ #{} {}", song.id, song.title);
    println!("  │  description : {}", or_dash(&song.description));
    println!("  └─ link        : {}", or_dash(&song.link));
}
