//! Login and profile commands.

use anyhow::{Context, Result};

use musicclub_client::Clients;
use musicclub_core::schema::auth::TgLoginRequest;
use musicclub_core::schema::user::Permissions;

use super::client::header;
use super::users::print_user;

pub async fn cmd_login(clients: &Clients, tg_user_id: u64, init_data: String) -> Result<()> {
    let session = clients
        .auth
        .login_with_telegram(TgLoginRequest {
            tg_user_id,
            init_data,
        })
        .await
        .context("LoginWithTelegram failed")?;

    header("Session");
    println!("  Access token : {}", session.access_token);
    println!("  Expires at   : {} (unix)", session.exp);
    println!("  Chat member  : {}", if session.is_chat_member { "yes" } else { "no" });
    if !session.join_request_url.is_empty() {
        println!("  Join chat    : {}", session.join_request_url);
    }
    if let Some(profile) = &session.profile {
        println!();
        print_user(profile);
    }
    if let Some(permissions) = &session.permissions {
        print_permissions(permissions);
    }
    println!();
    println!("Export it for later calls: export MUSICCLUB_TOKEN=<access token>");
    Ok(())
}

pub async fn cmd_profile(clients: &Clients) -> Result<()> {
    let resp = clients
        .auth
        .get_profile()
        .await
        .context("GetProfile failed (is MUSICCLUB_TOKEN set?)")?;

    header("Profile");
    match &resp.profile {
        Some(profile) => print_user(profile),
        None => println!("  No profile."),
    }
    if let Some(permissions) = &resp.permissions {
        print_permissions(permissions);
    }
    Ok(())
}

fn print_permissions(p: &Permissions) {
    let flag = |b: bool| if b { "✓" } else { "✗" };
    println!("  Permissions:");
    println!("    {} admin", flag(p.is_admin));
    println!("    {} edit own songs", flag(p.edit_own_songs));
    println!("    {} edit any song", flag(p.edit_any_songs));
    println!("    {} edit events", flag(p.edit_events));
}
