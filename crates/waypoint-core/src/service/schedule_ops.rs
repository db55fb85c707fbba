//! Scheduling operations for the TripPlanner.
//!
//! Each operation loads the plan, runs the scheduling engine with a sink that
//! writes every committed timetable back to the plan's row, and reports the
//! engine's outcome. The engine sees exactly the state the store holds; the
//! store receives exactly what the engine commits.

use tokio::task;

use super::TripPlanner;
use crate::{
    address::{DragSource, DropEvent, DropTarget},
    error::{PlannerError, Result},
    models::{Plan, Timetable},
    params::{AddSession, EditActivity, MoveActivity, PlaceSpot, SetFlights},
    schedule::{DropOutcome, EditOutcome, Scheduler, TimetableSink},
    store::Database,
};

/// Sink that persists each committed timetable into the plan's row.
struct StoreSink<'a> {
    db: &'a mut Database,
    plan_id: u64,
}

impl TimetableSink for StoreSink<'_> {
    fn timetable_changed(&mut self, timetable: &Timetable) -> Result<()> {
        self.db.set_timetable(self.plan_id, timetable)
    }
}

impl TripPlanner {
    /// Confirms a plan's flights and generates its timetable, replacing any
    /// previous one.
    pub async fn set_flights(&self, params: &SetFlights) -> Result<Timetable> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let flights = params.flights.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db.require_plan(plan_id)?;
            let sink = StoreSink {
                db: &mut db,
                plan_id,
            };
            let mut scheduler = Scheduler::new(plan.timetable, sink);
            Ok(scheduler.generate(flights)?.clone())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Places a cart spot into a slot of the plan's timetable.
    pub async fn place_spot(&self, params: &PlaceSpot) -> Result<DropOutcome> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let Plan {
                timetable, cart, ..
            } = db.require_plan(params.plan_id)?;
            let sink = StoreSink {
                db: &mut db,
                plan_id: params.plan_id,
            };
            let mut scheduler = Scheduler::new(timetable, sink);

            let event = DropEvent {
                source: DragSource::Cart {
                    index: params.cart_index,
                },
                destination: Some(DropTarget {
                    address: params.slot,
                    index: params.position,
                }),
            };
            scheduler.resolve_drop(&event, &cart)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves an already-placed activity to a new slot or position.
    pub async fn move_activity(&self, params: &MoveActivity) -> Result<DropOutcome> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let Plan {
                timetable, cart, ..
            } = db.require_plan(params.plan_id)?;
            let sink = StoreSink {
                db: &mut db,
                plan_id: params.plan_id,
            };
            let mut scheduler = Scheduler::new(timetable, sink);

            let event = DropEvent {
                source: DragSource::Slot {
                    address: params.from_slot,
                    index: params.from_position,
                },
                destination: Some(DropTarget {
                    address: params.to_slot,
                    index: params.to_position,
                }),
            };
            scheduler.resolve_drop(&event, &cart)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Merges a partial field update into one placed activity.
    pub async fn edit_activity(&self, params: &EditActivity) -> Result<EditOutcome> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db.require_plan(params.plan_id)?;
            let sink = StoreSink {
                db: &mut db,
                plan_id: params.plan_id,
            };
            let mut scheduler = Scheduler::new(plan.timetable, sink);
            scheduler.edit_activity(&params.slot, params.position, params.patch)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Appends a fresh session to one day's flex period.
    pub async fn add_session(&self, params: &AddSession) -> Result<EditOutcome> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db.require_plan(params.plan_id)?;
            let sink = StoreSink {
                db: &mut db,
                plan_id: params.plan_id,
            };
            let mut scheduler = Scheduler::new(plan.timetable, sink);
            scheduler.add_session(params.day, params.period)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
