//! Participation commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use musicclub_client::Clients;
use musicclub_core::schema::participation::{
    participation_name, CreateParticipationRequest, DeleteParticipationRequest,
    GetParticipationRequest, ListParticipationsRequest, Participation,
};

use super::client::header;

#[derive(Subcommand)]
pub enum ParticipationsCommand {
    /// List participations.
    List {
        #[arg(long, default_value_t = 0)]
        page_size: i32,
    },
    /// Show one participation.
    Get {
        song_id: u64,
        tg_id: u64,
        role_title: String,
    },
    /// Sign a member up for a role in a song.
    Join {
        song_id: u64,
        tg_id: u64,
        role_title: String,
    },
    /// Remove a member from a role.
    Leave {
        song_id: u64,
        tg_id: u64,
        role_title: String,
    },
}

pub async fn run(clients: &Clients, command: ParticipationsCommand) -> Result<()> {
    let client = &clients.participation;
    match command {
        ParticipationsCommand::List { page_size } => {
            let resp = client
                .list_participations(ListParticipationsRequest {
                    page_size,
                    ..Default::default()
                })
                .await
                .context("ListParticipations failed")?;

            if resp.participations.is_empty() {
                println!("Nobody has signed up for anything yet.");
                return Ok(());
            }
            header(&format!("Participations ({})", resp.participations.len()));
            for p in &resp.participations {
                print_participation(p);
            }
        }
        ParticipationsCommand::Get {
            song_id,
            tg_id,
            role_title,
        } => {
            let name = participation_name(song_id, tg_id, &role_title);
            let p = client
                .get_participation(GetParticipationRequest { name: name.clone() })
                .await
                .with_context(|| format!("GetParticipation {name} failed"))?;
            print_participation(&p);
        }
        ParticipationsCommand::Join {
            song_id,
            tg_id,
            role_title,
        } => {
            let p = client
                .create_participation(CreateParticipationRequest {
                    participation: Some(Participation {
                        tg_id,
                        song_id,
                        role_title,
                    }),
                })
                .await
                .context("CreateParticipation failed")?;
            println!("Joined:");
            print_participation(&p);
        }
        ParticipationsCommand::Leave {
            song_id,
            tg_id,
            role_title,
        } => {
            let name = participation_name(song_id, tg_id, &role_title);
            client
                .delete_participation(DeleteParticipationRequest { name: name.clone() })
                .await
                .with_context(|| format!("DeleteParticipation {name} failed"))?;
            println!("Left {name}.");
        }
    }
    Ok(())
}

fn print_participation(p: &Participation) {
    println!("  • song #{}: member {} as {}", p.song_id, p.tg_id, p.role_title);
}
