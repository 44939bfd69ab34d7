use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::{Controller, HttpRemoteClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod terminal;

use commands::{parse_command, Command, HELP};
use config::{load_settings, DEFAULT_CONFIG_PATH};
use terminal::TerminalSurface;

#[derive(Parser, Debug)]
#[command(about = "Interactive roster client for the puppy collection service")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    api_base: Option<String>,
    #[arg(long)]
    cohort: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(v) = args.api_base {
        settings.api_base = v;
    }
    if let Some(v) = args.cohort {
        settings.cohort = v;
    }
    let collection_url = settings.collection_url()?;
    info!(%collection_url, "using collection service");

    let remote = HttpRemoteClient::with_timeout(collection_url, settings.request_timeout())
        .context("failed to build http client")?;
    let controller = Controller::new(Arc::new(remote), Arc::new(TerminalSurface));
    controller.initialize().await;
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        let outcome = match command {
            Command::Refresh => controller.refresh().await,
            Command::Select(id) => controller.on_select(id).await,
            Command::Add(input) => controller.on_create_submit(input).await,
            Command::Remove(id) => controller.on_remove(id).await,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };
        debug!(?outcome, "command finished");
    }

    Ok(())
}
