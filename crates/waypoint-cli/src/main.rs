//! Waypoint CLI Application
//!
//! Command-line interface for the Waypoint travel itinerary planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::TripPlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Waypoint started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Spots(args)) => cli.handle_spots_command(args),
        Some(Cart { command }) => cli.handle_cart_command(command).await,
        Some(Flights { command }) => cli.handle_flights_command(command).await,
        Some(Slot { command }) => cli.handle_slot_command(command).await,
        None => cli.list_plans().await,
    }
}
