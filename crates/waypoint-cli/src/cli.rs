//! Command definitions and handlers using clap
//!
//! This module implements the parameter wrapper pattern: each command gets a
//! clap `Args` struct owning the CLI concerns (flags, help text, value
//! parsing) and a `From` conversion into the matching core parameter type,
//! so `waypoint_core::params` stays free of framework derives.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```
//!
//! The [`Cli`] struct at the bottom ties a planner and a renderer together
//! and executes the commands, formatting results as markdown.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::DateTime;
use waypoint_core::params::{
    AddSession, CartAdd, CartRemove, CreatePlan, EditActivity, Id, MoveActivity, PlaceSpot,
    SetFlights,
};
use waypoint_core::{
    catalog, ActivityPatch, DropOutcome, EditOutcome, FlexPeriod, FlightDetails, FlightPair,
    OperationStatus, PlannerError, SlotAddress, SpotListing, TripPlanner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Create a new plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan; a numbered default is used when omitted
    pub title: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan { title: val.title }
    }
}

/// Show details of a specific plan
///
/// Displays the plan's cart and, once flights are confirmed, the full
/// day-by-day itinerary with the slot token of every session so they can be
/// fed straight back into `slot` commands.
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show details for")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Catalog and cart commands
// ============================================================================

/// Browse the travel spot catalog
#[derive(Args)]
pub struct SpotsArgs {
    /// Only show spots in this city
    #[arg(long, help = "Catalog id of a city to filter by, e.g. 'tokyo'")]
    pub city: Option<String>,
}

/// Add a catalog spot to a plan's cart
#[derive(Args)]
pub struct CartAddArgs {
    /// ID of the plan whose cart to extend
    pub plan_id: u64,
    /// Catalog id of the spot, e.g. 'senso-ji' (see `wp spots`)
    pub spot_id: String,
}

impl From<CartAddArgs> for CartAdd {
    fn from(val: CartAddArgs) -> Self {
        CartAdd {
            plan_id: val.plan_id,
            spot_id: val.spot_id,
        }
    }
}

/// Remove a cart entry by position
#[derive(Args)]
pub struct CartRemoveArgs {
    /// ID of the plan whose cart to shrink
    pub plan_id: u64,
    /// 0-based cart position to remove (see `wp cart show`)
    pub index: usize,
}

impl From<CartRemoveArgs> for CartRemove {
    fn from(val: CartRemoveArgs) -> Self {
        CartRemove {
            plan_id: val.plan_id,
            index: val.index,
        }
    }
}

/// Show a plan's cart with positions
#[derive(Args)]
pub struct CartShowArgs {
    /// ID of the plan whose cart to display
    pub plan_id: u64,
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Add a catalog spot to a plan's cart
    #[command(alias = "a")]
    Add(CartAddArgs),
    /// Remove a cart entry by position
    #[command(alias = "rm")]
    Remove(CartRemoveArgs),
    /// Show a plan's cart with positions
    #[command(alias = "s")]
    Show(CartShowArgs),
}

// ============================================================================
// Flights commands
// ============================================================================

/// Confirm a plan's flights and generate its timetable
///
/// The timetable spans every date from the arrival flight's landing day to
/// the departure flight's takeoff day, inclusive. Setting flights again
/// regenerates the timetable from scratch, discarding placed activities.
/// Times are wall-clock local times in ISO format, e.g. `2024-08-01T15:30`.
#[derive(Args)]
pub struct SetFlightsArgs {
    /// ID of the plan to generate a timetable for
    pub plan_id: u64,

    /// Flight number of the inbound (arrival) leg, e.g. 'BA 5'
    #[arg(long)]
    pub arrival_flight: String,
    /// Departure airport of the inbound leg
    #[arg(long)]
    pub arrival_from: String,
    /// Arrival airport of the inbound leg
    #[arg(long)]
    pub arrival_to: String,
    /// Takeoff time of the inbound leg
    #[arg(long)]
    pub arrival_departs: DateTime,
    /// Landing time of the inbound leg; its date is the trip's first day
    #[arg(long)]
    pub arrival_arrives: DateTime,

    /// Flight number of the outbound (departure) leg
    #[arg(long)]
    pub departure_flight: String,
    /// Departure airport of the outbound leg
    #[arg(long)]
    pub departure_from: String,
    /// Arrival airport of the outbound leg
    #[arg(long)]
    pub departure_to: String,
    /// Takeoff time of the outbound leg; its date is the trip's last day
    #[arg(long)]
    pub departure_departs: DateTime,
    /// Landing time of the outbound leg
    #[arg(long)]
    pub departure_arrives: DateTime,
}

impl From<SetFlightsArgs> for SetFlights {
    fn from(val: SetFlightsArgs) -> Self {
        SetFlights {
            plan_id: val.plan_id,
            flights: FlightPair {
                arrival: FlightDetails {
                    flight_number: val.arrival_flight,
                    departure_airport: val.arrival_from,
                    arrival_airport: val.arrival_to,
                    departure_time: val.arrival_departs,
                    arrival_time: val.arrival_arrives,
                },
                departure: FlightDetails {
                    flight_number: val.departure_flight,
                    departure_airport: val.departure_from,
                    arrival_airport: val.departure_to,
                    departure_time: val.departure_departs,
                    arrival_time: val.departure_arrives,
                },
            },
        }
    }
}

#[derive(Subcommand)]
pub enum FlightsCommands {
    /// Confirm a plan's flights and generate its timetable
    #[command(alias = "s")]
    Set(SetFlightsArgs),
}

// ============================================================================
// Slot commands
// ============================================================================

/// Place a cart spot into a timetable slot
///
/// Slots are addressed by the token printed next to every session in
/// `wp plan show`, e.g. `0-morning-0` or `2-dinner-0`.
#[derive(Args)]
pub struct PlaceSpotArgs {
    /// ID of the plan being edited
    pub plan_id: u64,
    /// 0-based cart position of the spot to place
    pub cart_index: usize,
    /// Destination slot token, e.g. '0-morning-0'
    pub slot: SlotAddress,
    /// Insertion position within the slot's activity list
    #[arg(long, default_value_t = 0)]
    pub at: usize,
}

impl From<PlaceSpotArgs> for PlaceSpot {
    fn from(val: PlaceSpotArgs) -> Self {
        PlaceSpot {
            plan_id: val.plan_id,
            cart_index: val.cart_index,
            slot: val.slot,
            position: val.at,
        }
    }
}

/// Move an already-placed activity to a new slot or position
#[derive(Args)]
pub struct MoveActivityArgs {
    /// ID of the plan being edited
    pub plan_id: u64,
    /// Source slot token
    pub from_slot: SlotAddress,
    /// 0-based activity position within the source slot
    pub from_position: usize,
    /// Destination slot token
    pub to_slot: SlotAddress,
    /// Insertion position within the destination slot
    #[arg(long, default_value_t = 0)]
    pub at: usize,
}

impl From<MoveActivityArgs> for MoveActivity {
    fn from(val: MoveActivityArgs) -> Self {
        MoveActivity {
            plan_id: val.plan_id,
            from_slot: val.from_slot,
            from_position: val.from_position,
            to_slot: val.to_slot,
            to_position: val.at,
        }
    }
}

/// Edit fields of one placed activity
///
/// Only the provided fields change; everything else, including the
/// activity's identity, is preserved.
#[derive(Args)]
pub struct EditActivityArgs {
    /// ID of the plan being edited
    pub plan_id: u64,
    /// Slot token holding the activity
    pub slot: SlotAddress,
    /// 0-based activity position within the slot
    pub position: usize,
    /// Updated title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated free-text location line
    #[arg(short, long)]
    pub location: Option<String>,
    /// Updated remarks
    #[arg(short, long)]
    pub remarks: Option<String>,
}

impl From<EditActivityArgs> for EditActivity {
    fn from(val: EditActivityArgs) -> Self {
        EditActivity {
            plan_id: val.plan_id,
            slot: val.slot,
            position: val.position,
            patch: ActivityPatch {
                title: val.title,
                location: val.location,
                remarks: val.remarks,
                spot: None,
            },
        }
    }
}

/// Append a fresh session to one day's flex period
#[derive(Args)]
pub struct AddSessionArgs {
    /// ID of the plan being edited
    pub plan_id: u64,
    /// 0-based day index within the timetable
    pub day: usize,
    /// Which period to grow; meal periods always hold exactly one session
    pub period: FlexPeriodArg,
}

impl From<AddSessionArgs> for AddSession {
    fn from(val: AddSessionArgs) -> Self {
        AddSession {
            plan_id: val.plan_id,
            day: val.day,
            period: val.period.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum SlotCommands {
    /// Place a cart spot into a timetable slot
    #[command(alias = "p")]
    Place(PlaceSpotArgs),
    /// Move an already-placed activity to a new slot or position
    #[command(alias = "m")]
    Move(MoveActivityArgs),
    /// Edit fields of one placed activity
    #[command(alias = "e")]
    Edit(EditActivityArgs),
    /// Append a fresh session to one day's flex period
    #[command(alias = "a")]
    AddSession(AddSessionArgs),
}

/// Command-line argument representation of the extensible periods
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FlexPeriodArg {
    /// The morning period
    Morning,
    /// The afternoon period
    Afternoon,
    /// The night period
    Night,
}

impl From<FlexPeriodArg> for FlexPeriod {
    fn from(val: FlexPeriodArg) -> Self {
        match val {
            FlexPeriodArg::Morning => FlexPeriod::Morning,
            FlexPeriodArg::Afternoon => FlexPeriod::Afternoon,
            FlexPeriodArg::Night => FlexPeriod::Night,
        }
    }
}

// ============================================================================
// Command execution
// ============================================================================

/// Executes CLI commands against a planner, rendering results as markdown.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self.planner.create_plan(&args.into()).await?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let params: Id = args.into();
                let plan = self
                    .planner
                    .get_plan(&params)
                    .await?
                    .ok_or(PlannerError::PlanNotFound { id: params.id })?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    let status = OperationStatus::failure(format!(
                        "Deleting plan {} requires --confirm",
                        args.id
                    ));
                    return self.renderer.render(&status.to_string());
                }
                self.planner.delete_plan(&Id { id: args.id }).await?;
                let status = OperationStatus::success(format!("Deleted plan {}", args.id));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self.planner.list_plans_summary().await?;
        if summaries.is_empty() {
            self.renderer.render(&summaries.to_string())
        } else {
            self.renderer
                .render(&format!("# Plans\n\n{summaries}"))
        }
    }

    pub fn handle_spots_command(&self, args: SpotsArgs) -> Result<()> {
        let spots = match args.city {
            Some(city_id) => catalog::spots()
                .into_iter()
                .filter(|spot| spot.city_id == city_id)
                .collect(),
            None => catalog::spots(),
        };
        self.renderer
            .render(&format!("# Travel Spots\n\n{}", SpotListing(spots)))
    }

    pub async fn handle_cart_command(&self, command: CartCommands) -> Result<()> {
        match command {
            CartCommands::Add(args) => {
                let cart = self.planner.cart_add(&args.into()).await?;
                let status = OperationStatus::success(format!(
                    "Added spot to cart ({} spots total)",
                    cart.len()
                ));
                self.renderer.render(&status.to_string())
            }
            CartCommands::Remove(args) => {
                let cart = self.planner.cart_remove(&args.into()).await?;
                let status = OperationStatus::success(format!(
                    "Removed cart entry ({} spots left)",
                    cart.len()
                ));
                self.renderer.render(&status.to_string())
            }
            CartCommands::Show(args) => {
                let plan = self
                    .planner
                    .get_plan(&Id { id: args.plan_id })
                    .await?
                    .ok_or(PlannerError::PlanNotFound { id: args.plan_id })?;
                if plan.cart.is_empty() {
                    return self.renderer.render("The cart is empty.\n");
                }
                let mut output = String::from("## Cart\n\n");
                for (index, spot) in plan.cart.iter().enumerate() {
                    output.push_str(&format!(
                        "{}. **{}**: {}\n",
                        index, spot.name, spot.description
                    ));
                }
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_flights_command(&self, command: FlightsCommands) -> Result<()> {
        match command {
            FlightsCommands::Set(args) => {
                let timetable = self.planner.set_flights(&args.into()).await?;
                self.renderer
                    .render(&format!("# Itinerary\n\n{timetable}"))
            }
        }
    }

    pub async fn handle_slot_command(&self, command: SlotCommands) -> Result<()> {
        let status = match command {
            SlotCommands::Place(args) => match self.planner.place_spot(&args.into()).await? {
                DropOutcome::Placed | DropOutcome::Moved => {
                    OperationStatus::success("Placed spot into slot".to_string())
                }
                DropOutcome::Ignored => OperationStatus::failure(
                    "Nothing placed; check the cart index and slot token".to_string(),
                ),
            },
            SlotCommands::Move(args) => match self.planner.move_activity(&args.into()).await? {
                DropOutcome::Placed | DropOutcome::Moved => {
                    OperationStatus::success("Moved activity".to_string())
                }
                DropOutcome::Ignored => OperationStatus::failure(
                    "Nothing moved; check the slot tokens and positions".to_string(),
                ),
            },
            SlotCommands::Edit(args) => match self.planner.edit_activity(&args.into()).await? {
                EditOutcome::Applied => OperationStatus::success("Updated activity".to_string()),
                EditOutcome::Ignored => OperationStatus::failure(
                    "Nothing updated; check the slot token and position".to_string(),
                ),
            },
            SlotCommands::AddSession(args) => match self.planner.add_session(&args.into()).await? {
                EditOutcome::Applied => OperationStatus::success("Added session".to_string()),
                EditOutcome::Ignored => OperationStatus::failure(
                    "No session added; check the day index".to_string(),
                ),
            },
        };
        self.renderer.render(&status.to_string())
    }
}
