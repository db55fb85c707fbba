//! Tests for the service module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::error::PlannerError;
use crate::models::{FlexPeriod, FlightDetails, FlightPair};
use crate::params::{
    AddSession, CartAdd, CartRemove, CreatePlan, EditActivity, Id, MoveActivity, PlaceSpot,
    SetFlights,
};
use crate::address::SlotAddress;
use crate::models::ActivityPatch;
use crate::schedule::{DropOutcome, EditOutcome};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn august_flights() -> FlightPair {
    FlightPair {
        arrival: FlightDetails {
            flight_number: "BA 5".to_string(),
            departure_airport: "LHR".to_string(),
            arrival_airport: "NRT".to_string(),
            departure_time: date(2024, 7, 31).at(19, 0, 0, 0),
            arrival_time: date(2024, 8, 1).at(15, 30, 0, 0),
        },
        departure: FlightDetails {
            flight_number: "BA 6".to_string(),
            departure_airport: "NRT".to_string(),
            arrival_airport: "LHR".to_string(),
            departure_time: date(2024, 8, 3).at(11, 45, 0, 0),
            arrival_time: date(2024, 8, 3).at(16, 0, 0, 0),
        },
    }
}

#[tokio::test]
async fn test_builder_rejects_directory_as_database_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = TripPlannerBuilder::new()
        .with_database_path(Some(temp_dir.path()))
        .build()
        .await;

    match result {
        Err(PlannerError::InvalidInput { field, reason }) => {
            assert_eq!(field, "database_file");
            assert!(reason.contains("directory"));
        }
        Err(other) => panic!("Expected InvalidInput error, got {other:?}"),
        Ok(_) => panic!("Expected InvalidInput error, got a planner"),
    }
}

#[tokio::test]
async fn test_create_plan_with_title() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&CreatePlan {
            title: Some("Tokyo in August".to_string()),
        })
        .await
        .expect("Failed to create plan");

    assert_eq!(plan.title, "Tokyo in August");
    assert!(plan.timetable.is_none());
    assert!(plan.cart.is_empty());
}

#[tokio::test]
async fn test_create_plan_default_title_is_numbered() {
    let (_temp_dir, planner) = create_test_planner().await;

    let first = planner.create_plan(&CreatePlan::default()).await.unwrap();
    let second = planner.create_plan(&CreatePlan::default()).await.unwrap();

    assert_eq!(first.title, "Trip to somewhere 1");
    assert_eq!(second.title, "Trip to somewhere 2");
}

#[tokio::test]
async fn test_list_plans_summary() {
    let (_temp_dir, planner) = create_test_planner().await;

    let summaries = planner.list_plans_summary().await.unwrap();
    assert!(summaries.is_empty());

    planner
        .create_plan(&CreatePlan {
            title: Some("First".to_string()),
        })
        .await
        .unwrap();

    let summaries = planner.list_plans_summary().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries.0[0].title, "First");
    assert_eq!(summaries.0[0].day_count, 0);
}

#[tokio::test]
async fn test_delete_plan() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();
    planner.delete_plan(&Id { id: plan.id }).await.unwrap();

    assert!(planner.get_plan(&Id { id: plan.id }).await.unwrap().is_none());

    let missing = planner.delete_plan(&Id { id: plan.id }).await;
    assert!(matches!(missing, Err(PlannerError::PlanNotFound { .. })));
}

#[tokio::test]
async fn test_cart_add_and_remove() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();

    let cart = planner
        .cart_add(&CartAdd {
            plan_id: plan.id,
            spot_id: "senso-ji".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(cart.len(), 1);

    let cart = planner
        .cart_add(&CartAdd {
            plan_id: plan.id,
            spot_id: "tokyo-skytree".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(cart.len(), 2);

    let cart = planner
        .cart_remove(&CartRemove {
            plan_id: plan.id,
            index: 0,
        })
        .await
        .unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, "tokyo-skytree");

    // Unknown catalog id
    let unknown = planner
        .cart_add(&CartAdd {
            plan_id: plan.id,
            spot_id: "atlantis".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(PlannerError::SpotNotFound { .. })));
}

#[tokio::test]
async fn test_set_flights_generates_and_persists() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();

    let timetable = planner
        .set_flights(&SetFlights {
            plan_id: plan.id,
            flights: august_flights(),
        })
        .await
        .unwrap();
    assert_eq!(timetable.days.len(), 3);

    // The snapshot is in the store, not just the return value.
    let stored = planner
        .get_plan(&Id { id: plan.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.timetable.unwrap(), timetable);
}

#[tokio::test]
async fn test_set_flights_rejects_inverted_range() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();

    let mut flights = august_flights();
    flights.departure.departure_time = date(2024, 7, 20).at(9, 0, 0, 0);

    let result = planner
        .set_flights(&SetFlights {
            plan_id: plan.id,
            flights,
        })
        .await;
    assert!(matches!(result, Err(PlannerError::InvalidDateRange { .. })));

    // Nothing was persisted.
    let stored = planner
        .get_plan(&Id { id: plan.id })
        .await
        .unwrap()
        .unwrap();
    assert!(stored.timetable.is_none());
}

#[tokio::test]
async fn test_full_editing_flow() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();

    planner
        .cart_add(&CartAdd {
            plan_id: plan.id,
            spot_id: "senso-ji".to_string(),
        })
        .await
        .unwrap();
    planner
        .set_flights(&SetFlights {
            plan_id: plan.id,
            flights: august_flights(),
        })
        .await
        .unwrap();

    // Place into day 0 morning
    let morning = SlotAddress::new(0, FlexPeriod::Morning, 0);
    let outcome = planner
        .place_spot(&PlaceSpot {
            plan_id: plan.id,
            cart_index: 0,
            slot: morning,
            position: 0,
        })
        .await
        .unwrap();
    assert_eq!(outcome, DropOutcome::Placed);

    // Edit remarks
    let outcome = planner
        .edit_activity(&EditActivity {
            plan_id: plan.id,
            slot: morning,
            position: 0,
            patch: ActivityPatch {
                remarks: Some("go early".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(outcome, EditOutcome::Applied);

    // Grow day 0's night period and move the activity there
    let outcome = planner
        .add_session(&AddSession {
            plan_id: plan.id,
            day: 0,
            period: FlexPeriod::Night,
        })
        .await
        .unwrap();
    assert_eq!(outcome, EditOutcome::Applied);

    let night = SlotAddress::new(0, FlexPeriod::Night, 1);
    let outcome = planner
        .move_activity(&MoveActivity {
            plan_id: plan.id,
            from_slot: morning,
            from_position: 0,
            to_slot: night,
            to_position: 0,
        })
        .await
        .unwrap();
    assert_eq!(outcome, DropOutcome::Moved);

    // Verify the whole thing through the store
    let stored = planner
        .get_plan(&Id { id: plan.id })
        .await
        .unwrap()
        .unwrap();
    let timetable = stored.timetable.unwrap();
    assert!(timetable.session_at(&morning).unwrap().activities.is_empty());
    let activity = &timetable.session_at(&night).unwrap().activities[0];
    assert_eq!(activity.title, "Sensō-ji");
    assert_eq!(activity.remarks.as_deref(), Some("go early"));
}

#[tokio::test]
async fn test_stale_addresses_are_noops() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&CreatePlan::default()).await.unwrap();
    planner
        .set_flights(&SetFlights {
            plan_id: plan.id,
            flights: august_flights(),
        })
        .await
        .unwrap();

    let outcome = planner
        .place_spot(&PlaceSpot {
            plan_id: plan.id,
            cart_index: 0, // cart is empty
            slot: SlotAddress::new(0, FlexPeriod::Morning, 0),
            position: 0,
        })
        .await
        .unwrap();
    assert_eq!(outcome, DropOutcome::Ignored);

    let outcome = planner
        .add_session(&AddSession {
            plan_id: plan.id,
            day: 11,
            period: FlexPeriod::Morning,
        })
        .await
        .unwrap();
    assert_eq!(outcome, EditOutcome::Ignored);
}

#[tokio::test]
async fn test_operations_on_missing_plan_fail() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .set_flights(&SetFlights {
            plan_id: 404,
            flights: august_flights(),
        })
        .await;
    assert!(matches!(result, Err(PlannerError::PlanNotFound { id: 404 })));
}
