//! parkdesk - parking slot and ticket management service
//!
//! Entry point: parses CLI flags, layers them over the file/env
//! configuration, builds the in-memory lot, and serves the HTTP API until
//! shutdown.

use std::sync::Arc;

use clap::Parser;
use parkdesk::api::{self, ServerConfig};
use parkdesk::cli::Cli;
use parkdesk::config::Settings;
use parkdesk::lot::ParkingLot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "parkdesk=debug" } else { "parkdesk=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(slots) = cli.slots {
        settings.lot.slots = slots;
    }

    tracing::info!(
        slots = settings.lot.slots,
        "initializing parking lot"
    );
    let lot = Arc::new(ParkingLot::new(settings.lot.slots));

    api::serve(
        ServerConfig {
            host: settings.server.host,
            port: settings.server.port,
        },
        lot,
    )
    .await
}
