//! Concert commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use musicclub_client::Clients;
use musicclub_core::schema::concert::{
    concert_name, Concert, DeleteConcertRequest, GetConcertRequest, ListConcertsRequest,
};

use super::client::header;

#[derive(Subcommand)]
pub enum ConcertsCommand {
    /// List concerts.
    List {
        #[arg(long, default_value_t = 0)]
        page_size: i32,
    },
    /// Show one concert.
    Get { id: u64 },
    /// Cancel a concert.
    Delete { id: u64 },
}

pub async fn run(clients: &Clients, command: ConcertsCommand) -> Result<()> {
    match command {
        ConcertsCommand::List { page_size } => {
            let resp = clients
                .concert
                .list_concerts(ListConcertsRequest {
                    page_size,
                    ..Default::default()
                })
                .await
                .context("ListConcerts failed")?;

            if resp.concerts.is_empty() {
                println!("No concerts scheduled.");
                return Ok(());
            }
            header(&format!("Concerts ({})", resp.concerts.len()));
            for concert in &resp.concerts {
                print_concert(concert);
            }
            Ok(())
        }
        ConcertsCommand::Get { id } => {
            let concert = clients
                .concert
                .get_concert(GetConcertRequest {
                    name: concert_name(id),
                })
                .await
                .with_context(|| format!("GetConcert {id} failed"))?;
            print_concert(&concert);
            Ok(())
        }
        ConcertsCommand::Delete { id } => {
            clients
                .concert
                .delete_concert(DeleteConcertRequest {
                    name: concert_name(id),
                })
                .await
                .with_context(|| format!("DeleteConcert {id} failed"))?;
            println!("Deleted concert {id}.");
            Ok(())
        }
    }
}

fn print_concert(concert: &Concert) {
    let date = match concert.date {
        Some(ts) => format!("{} (unix)", ts.seconds),
        None => "date not set".to_string(),
    };
    println!("  ┌─ #{} {}", concert.id, concert.name);
    println!("  └─ date : {}", date);
}
