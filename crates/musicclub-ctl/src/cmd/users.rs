//! Member directory commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use musicclub_client::Clients;
use musicclub_core::schema::user::{GetUserRequest, ListUsersRequest, User};

use super::client::{header, or_dash};

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List members.
    List {
        #[arg(long, default_value_t = 0)]
        page_size: i32,
    },
    /// Show one member by user id.
    Get { id: String },
}

pub async fn run(clients: &Clients, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List { page_size } => {
            let resp = clients
                .user
                .list_users(ListUsersRequest {
                    page_size,
                    ..Default::default()
                })
                .await
                .context("ListUsers failed")?;

            header(&format!("Members ({})", resp.users.len()));
            for user in &resp.users {
                print_user(user);
            }
        }
        UsersCommand::Get { id } => {
            let user = clients
                .user
                .get_user(GetUserRequest { name: id.clone() })
                .await
                .with_context(|| format!("GetUser {id} failed"))?;
            print_user(&user);
        }
    }
    Ok(())
}

pub fn print_user(user: &User) {
    println!("  ┌─ {}", or_dash(&user.display_name));
    println!("  │  id       : {}", user.id);
    println!("  │  username : {}", or_dash(&user.username));
    println!("  └─ telegram : {}", user.tg_id);
}
