//! Wayfarer CLI
//!
//! Command-line front end for the itinerary planner: trip and segment
//! management, the sidebar listing and route draw plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::ItineraryBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let itinerary = ItineraryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open the itinerary database")?;

    info!("Using database {}", itinerary.database_path().display());

    let cli = Cli::new(itinerary, TerminalRenderer::new(!no_color), json);

    match command {
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Segment { command }) => cli.handle_segment_command(command).await,
        Some(Sidebar(args)) => cli.sidebar(args).await,
        Some(Route(args)) => cli.route(args).await,
        None => cli.list_trips().await,
    }
}
