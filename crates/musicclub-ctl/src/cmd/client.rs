//! Client construction and output helpers shared by the commands.

use std::sync::Arc;

use anyhow::{Context, Result};

use musicclub_client::{BearerAuth, CallLogger, Clients, SharedCredential, Transport};
use musicclub_core::config::ClientConfig;

/// Build the one transport for this process and bind every stub to it.
pub fn connect(config: &ClientConfig, token: Option<String>, trace_calls: bool) -> Result<Clients> {
    let credential = SharedCredential::new();
    if let Some(token) = token {
        credential.set(token);
    }

    let mut builder = Transport::from_config(config);
    if trace_calls {
        builder = builder.interceptor(CallLogger);
    }
    let transport = builder.interceptor(BearerAuth::new(credential)).build()?;

    Ok(Clients::new(Arc::new(transport)))
}

pub fn cmd_config(config: &ClientConfig, init: bool) -> Result<()> {
    if init {
        let path = ClientConfig::write_default_if_missing()
            .context("failed to write default config")?;
        println!("Config file ready at {}", path.display());
    }
    header("Client Configuration");
    println!("  Config file : {}", ClientConfig::file_path().display());
    println!("  Endpoint    : {}", config.endpoint.base_url);
    println!("  Wire format : {}", config.endpoint.wire_format);
    match config.endpoint.timeout() {
        Some(t) => println!("  Timeout     : {}s", t.as_secs()),
        None => println!("  Timeout     : none"),
    }
    Ok(())
}

pub fn header(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════");
}

/// Empty strings print as a dash.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}
