//! musicclub-ctl — command-line client for the music-club services.

mod cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use musicclub_core::config::ClientConfig;
use musicclub_core::WireFormat;

const TOKEN_ENV: &str = "MUSICCLUB_TOKEN";

#[derive(Parser)]
#[command(name = "musicclub-ctl", version, about = "Talk to the music-club RPC services")]
struct Cli {
    /// Base endpoint. Overrides config file and MUSICCLUB_GRPC_HOST.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Bearer token. Falls back to $MUSICCLUB_TOKEN.
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Use the JSON text encoding instead of binary.
    #[arg(long, global = true)]
    text: bool,

    /// Log every call at info level.
    #[arg(long, global = true)]
    trace_calls: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Song catalogue.
    #[command(subcommand)]
    Songs(cmd::songs::SongsCommand),
    /// Concerts.
    #[command(subcommand)]
    Concerts(cmd::concerts::ConcertsCommand),
    /// Who plays what in which song.
    #[command(subcommand)]
    Participations(cmd::participations::ParticipationsCommand),
    /// Club members.
    #[command(subcommand)]
    Users(cmd::users::UsersCommand),
    /// Log in with a Telegram user id and print the session.
    Login {
        tg_user_id: u64,
        /// Telegram WebApp init data.
        #[arg(long, default_value = "")]
        init_data: String,
    },
    /// Show the profile behind the current token.
    Profile,
    /// Print the effective client configuration.
    Config {
        /// Write a default config file first if none exists.
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        ClientConfig::default()
    });
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }
    if cli.text {
        config.endpoint.wire_format = WireFormat::Text;
    }

    if let Command::Config { init } = cli.command {
        return cmd::client::cmd_config(&config, init);
    }

    let clients = cmd::client::connect(&config, cli.token.clone(), cli.trace_calls)
        .context("failed to set up RPC clients")?;

    match cli.command {
        Command::Songs(c) => cmd::songs::run(&clients, c).await,
        Command::Concerts(c) => cmd::concerts::run(&clients, c).await,
        Command::Participations(c) => cmd::participations::run(&clients, c).await,
        Command::Users(c) => cmd::users::run(&clients, c).await,
        Command::Login {
            tg_user_id,
            init_data,
        } => cmd::auth::cmd_login(&clients, tg_user_id, init_data).await,
        Command::Profile => cmd::auth::cmd_profile(&clients).await,
        Command::Config { .. } => unreachable!("handled before connecting"),
    }
}
