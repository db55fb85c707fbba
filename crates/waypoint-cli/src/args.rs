use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CartCommands, FlightsCommands, PlanCommands, SlotCommands, SpotsArgs};

/// Main command-line interface for the Waypoint travel planner
///
/// Waypoint builds day-by-day travel itineraries: pick spots from the
/// catalog into a plan's cart, confirm the plan's flights to generate a
/// timetable of days, then place, move and edit activities slot by slot.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// - `plan`: manage plans (create, list, show, delete)
/// - `spots`: browse the travel spot catalog
/// - `cart`: manage a plan's cart of candidate spots
/// - `flights`: confirm flights and generate the timetable
/// - `slot`: place, move and edit activities within timetable slots
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse the travel spot catalog
    Spots(SpotsArgs),
    /// Manage a plan's cart
    #[command(alias = "c")]
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Confirm flights and generate the timetable
    #[command(alias = "f")]
    Flights {
        #[command(subcommand)]
        command: FlightsCommands,
    },
    /// Place, move and edit activities within timetable slots
    #[command(alias = "s")]
    Slot {
        #[command(subcommand)]
        command: SlotCommands,
    },
}
