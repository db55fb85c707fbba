//! Tests for the scheduling engine.

use std::cell::RefCell;
use std::rc::Rc;

use jiff::civil::date;

use super::*;
use crate::address::{DragSource, DropEvent, DropTarget, SlotAddress};
use crate::catalog;
use crate::error::PlannerError;
use crate::models::{
    ActivityPatch, FlexPeriod, FlightDetails, FlightPair, MealPeriod, TravelSpot,
};

fn flight_pair(arrival_date: jiff::civil::Date, departure_date: jiff::civil::Date) -> FlightPair {
    FlightPair {
        arrival: FlightDetails {
            flight_number: "BA 5".to_string(),
            departure_airport: "LHR".to_string(),
            arrival_airport: "NRT".to_string(),
            departure_time: arrival_date.yesterday().unwrap().at(19, 0, 0, 0),
            arrival_time: arrival_date.at(15, 30, 0, 0),
        },
        departure: FlightDetails {
            flight_number: "BA 6".to_string(),
            departure_airport: "NRT".to_string(),
            arrival_airport: "LHR".to_string(),
            departure_time: departure_date.at(11, 45, 0, 0),
            arrival_time: departure_date.at(16, 0, 0, 0),
        },
    }
}

/// Sink that records every committed timetable.
fn recording_sink() -> (
    Rc<RefCell<Vec<Timetable>>>,
    impl FnMut(&Timetable) -> crate::error::Result<()>,
) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&log);
    let sink = move |timetable: &Timetable| {
        sink_log.borrow_mut().push(timetable.clone());
        Ok(())
    };
    (log, sink)
}

fn test_cart() -> Vec<TravelSpot> {
    vec![
        catalog::spot("senso-ji").unwrap(),
        catalog::spot("tokyo-skytree").unwrap(),
    ]
}

fn scheduler_with_days(
    arrival: jiff::civil::Date,
    departure: jiff::civil::Date,
) -> (
    Rc<RefCell<Vec<Timetable>>>,
    Scheduler<impl TimetableSink>,
) {
    let (log, sink) = recording_sink();
    let mut scheduler = Scheduler::new(None, sink);
    scheduler
        .generate(flight_pair(arrival, departure))
        .expect("generation should succeed");
    (log, scheduler)
}

#[test]
fn test_generate_three_day_span() {
    let (log, scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));

    let timetable = scheduler.timetable().unwrap();
    assert_eq!(timetable.days.len(), 3);
    assert_eq!(timetable.days[0].date, date(2024, 8, 1));
    assert_eq!(timetable.days[1].date, date(2024, 8, 2));
    assert_eq!(timetable.days[2].date, date(2024, 8, 3));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(&log.borrow()[0], timetable);
}

#[test]
fn test_generate_day_structure_is_empty() {
    let (_log, scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));

    for day in &scheduler.timetable().unwrap().days {
        for meal in [MealPeriod::Breakfast, MealPeriod::Lunch, MealPeriod::Dinner] {
            assert!(day.meal(meal).activities.is_empty());
        }
        for flex in [FlexPeriod::Morning, FlexPeriod::Afternoon, FlexPeriod::Night] {
            assert_eq!(day.flex(flex).len(), 1);
            assert!(day.flex(flex)[0].activities.is_empty());
        }
    }
}

#[test]
fn test_generate_single_day_when_dates_equal() {
    let (_log, scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 1));
    assert_eq!(scheduler.timetable().unwrap().days.len(), 1);
}

#[test]
fn test_generate_session_ids_are_unique() {
    let (_log, scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 4));

    let mut ids = Vec::new();
    for day in &scheduler.timetable().unwrap().days {
        ids.push(day.breakfast.id);
        ids.push(day.lunch.id);
        ids.push(day.dinner.id);
        for flex in [FlexPeriod::Morning, FlexPeriod::Afternoon, FlexPeriod::Night] {
            ids.extend(day.flex(flex).iter().map(|s| s.id));
        }
    }
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_generate_rejects_inverted_dates() {
    let (log, sink) = recording_sink();
    let mut scheduler = Scheduler::new(None, sink);

    let result = scheduler.generate(flight_pair(date(2024, 8, 3), date(2024, 8, 1)));
    assert!(matches!(
        result,
        Err(PlannerError::InvalidDateRange { .. })
    ));
    assert!(scheduler.timetable().is_none());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_regenerate_discards_placed_activities() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));
    let cart = test_cart();

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: SlotAddress::new(0, FlexPeriod::Morning, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Placed);
    assert_eq!(scheduler.timetable().unwrap().activity_count(), 1);

    // Same day count, fully fresh timetable
    scheduler
        .generate(flight_pair(date(2024, 9, 1), date(2024, 9, 3)))
        .unwrap();
    assert_eq!(scheduler.timetable().unwrap().days.len(), 3);
    assert_eq!(scheduler.timetable().unwrap().activity_count(), 0);
}

#[test]
fn test_place_cart_spot_into_morning() {
    let (log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));
    let cart = test_cart();

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: SlotAddress::new(0, FlexPeriod::Morning, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Placed);

    let session = scheduler
        .timetable()
        .unwrap()
        .session_at(&SlotAddress::new(0, FlexPeriod::Morning, 0))
        .unwrap();
    assert_eq!(session.activities.len(), 1);
    let activity = &session.activities[0];
    assert_eq!(activity.title, "Sensō-ji");
    assert_eq!(activity.location, "Tokyo, Japan");
    assert_eq!(activity.remarks, None);
    assert_eq!(activity.spot.as_ref().unwrap().id, "senso-ji");
    assert_eq!(log.borrow().len(), 2); // generate + place
}

#[test]
fn test_place_into_meal_slot_ignores_session_index() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();

    // Meal slots resolve regardless of the session segment of the address.
    let event = DropEvent {
        source: DragSource::Cart { index: 1 },
        destination: Some(DropTarget {
            address: SlotAddress::new(1, MealPeriod::Dinner, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Placed);
    assert_eq!(
        scheduler.timetable().unwrap().days[1].dinner.activities[0].title,
        "Tokyo Skytree"
    );
}

#[test]
fn test_place_in_middle_shifts_right() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let address = SlotAddress::new(0, FlexPeriod::Afternoon, 0);

    for index in [0, 1] {
        let event = DropEvent {
            source: DragSource::Cart { index },
            destination: Some(DropTarget { address, index }),
        };
        scheduler.resolve_drop(&event, &cart).unwrap();
    }
    let before: Vec<_> = scheduler
        .timetable()
        .unwrap()
        .session_at(&address)
        .unwrap()
        .activities
        .iter()
        .map(|a| (a.id, a.title.clone()))
        .collect();

    // Drop another copy of cart[0] between the two existing activities
    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget { address, index: 1 }),
    };
    scheduler.resolve_drop(&event, &cart).unwrap();

    let session = scheduler.timetable().unwrap().session_at(&address).unwrap();
    assert_eq!(session.activities.len(), 3);
    assert_eq!(session.activities[1].title, "Sensō-ji");
    // Neighbours kept their identity and relative order
    assert_eq!((session.activities[0].id, session.activities[0].title.clone()), before[0]);
    assert_eq!((session.activities[2].id, session.activities[2].title.clone()), before[1]);
}

#[test]
fn test_place_clamps_past_end() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let address = SlotAddress::new(0, FlexPeriod::Night, 0);

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget { address, index: 99 }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Placed);
    assert_eq!(
        scheduler
            .timetable()
            .unwrap()
            .session_at(&address)
            .unwrap()
            .activities
            .len(),
        1
    );
}

#[test]
fn test_drop_without_destination_is_noop() {
    let (log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));
    let cart = test_cart();
    let before = scheduler.timetable().unwrap().clone();

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: None,
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Ignored);
    assert_eq!(scheduler.timetable().unwrap(), &before);
    assert_eq!(log.borrow().len(), 1); // only the generate commit
}

#[test]
fn test_drop_with_stale_address_is_noop() {
    let (log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();

    // Day 5 existed in some earlier, longer timetable but not this one.
    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: SlotAddress::new(5, FlexPeriod::Morning, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Ignored);

    // Session index out of range within an existing flex period
    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: SlotAddress::new(0, FlexPeriod::Morning, 3),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Ignored);

    // Cart position that does not exist
    let event = DropEvent {
        source: DragSource::Cart { index: 9 },
        destination: Some(DropTarget {
            address: SlotAddress::new(0, FlexPeriod::Morning, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Ignored);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_move_within_session_preserves_identity() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let address = SlotAddress::new(0, FlexPeriod::Morning, 0);

    for index in [0, 1] {
        let event = DropEvent {
            source: DragSource::Cart { index },
            destination: Some(DropTarget { address, index }),
        };
        scheduler.resolve_drop(&event, &cart).unwrap();
    }
    let ids: Vec<_> = scheduler
        .timetable()
        .unwrap()
        .session_at(&address)
        .unwrap()
        .activities
        .iter()
        .map(|a| a.id)
        .collect();

    // Drag the first activity below the second
    let event = DropEvent {
        source: DragSource::Slot { address, index: 0 },
        destination: Some(DropTarget { address, index: 1 }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Moved);

    let after: Vec<_> = scheduler
        .timetable()
        .unwrap()
        .session_at(&address)
        .unwrap()
        .activities
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(after, vec![ids[1], ids[0]]);
}

#[test]
fn test_move_across_sessions() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let morning = SlotAddress::new(0, FlexPeriod::Morning, 0);
    let night = SlotAddress::new(1, FlexPeriod::Night, 0);

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: morning,
            index: 0,
        }),
    };
    scheduler.resolve_drop(&event, &cart).unwrap();
    let id = scheduler.timetable().unwrap().session_at(&morning).unwrap().activities[0].id;

    let event = DropEvent {
        source: DragSource::Slot {
            address: morning,
            index: 0,
        },
        destination: Some(DropTarget {
            address: night,
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Moved);

    let timetable = scheduler.timetable().unwrap();
    assert!(timetable.session_at(&morning).unwrap().activities.is_empty());
    assert_eq!(timetable.session_at(&night).unwrap().activities[0].id, id);
}

#[test]
fn test_move_with_bad_destination_leaves_source_in_place() {
    let (log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let morning = SlotAddress::new(0, FlexPeriod::Morning, 0);

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget {
            address: morning,
            index: 0,
        }),
    };
    scheduler.resolve_drop(&event, &cart).unwrap();
    let commits = log.borrow().len();

    let event = DropEvent {
        source: DragSource::Slot {
            address: morning,
            index: 0,
        },
        destination: Some(DropTarget {
            address: SlotAddress::new(7, FlexPeriod::Night, 0),
            index: 0,
        }),
    };
    assert_eq!(scheduler.resolve_drop(&event, &cart).unwrap(), DropOutcome::Ignored);

    // No partial commit: the activity is still where it was.
    assert_eq!(
        scheduler.timetable().unwrap().session_at(&morning).unwrap().activities.len(),
        1
    );
    assert_eq!(log.borrow().len(), commits);
}

#[test]
fn test_edit_remarks_only_touches_remarks() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let cart = test_cart();
    let address = SlotAddress::new(0, FlexPeriod::Morning, 0);

    let event = DropEvent {
        source: DragSource::Cart { index: 0 },
        destination: Some(DropTarget { address, index: 0 }),
    };
    scheduler.resolve_drop(&event, &cart).unwrap();
    let before = scheduler.timetable().unwrap().session_at(&address).unwrap().activities[0].clone();

    let patch = ActivityPatch {
        remarks: Some("buy tickets ahead".to_string()),
        ..Default::default()
    };
    assert_eq!(
        scheduler.edit_activity(&address, 0, patch).unwrap(),
        EditOutcome::Applied
    );

    let after = &scheduler.timetable().unwrap().session_at(&address).unwrap().activities[0];
    assert_eq!(after.remarks.as_deref(), Some("buy tickets ahead"));
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.location, before.location);
    assert_eq!(after.spot, before.spot);
}

#[test]
fn test_edit_unresolvable_is_silently_ignored() {
    let (log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    let commits = log.borrow().len();

    let patch = ActivityPatch {
        title: Some("anything".to_string()),
        ..Default::default()
    };
    // Empty session: there is no activity at position 0.
    assert_eq!(
        scheduler
            .edit_activity(&SlotAddress::new(0, FlexPeriod::Morning, 0), 0, patch.clone())
            .unwrap(),
        EditOutcome::Ignored
    );
    // Day out of range.
    assert_eq!(
        scheduler
            .edit_activity(&SlotAddress::new(9, FlexPeriod::Morning, 0), 0, patch)
            .unwrap(),
        EditOutcome::Ignored
    );
    assert_eq!(log.borrow().len(), commits);
}

#[test]
fn test_add_session_appends_to_one_period_only() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 3));
    let before = scheduler.timetable().unwrap().clone();

    assert_eq!(
        scheduler.add_session(1, FlexPeriod::Afternoon).unwrap(),
        EditOutcome::Applied
    );

    let after = scheduler.timetable().unwrap();
    assert_eq!(after.days[1].afternoon.len(), 2);
    assert!(after.days[1].afternoon[1].activities.is_empty());
    // The pre-existing session is untouched, in place, same identity.
    assert_eq!(after.days[1].afternoon[0], before.days[1].afternoon[0]);
    // Every other day and period is byte-for-byte what it was.
    assert_eq!(after.days[0], before.days[0]);
    assert_eq!(after.days[2], before.days[2]);
    assert_eq!(after.days[1].morning, before.days[1].morning);
    assert_eq!(after.days[1].night, before.days[1].night);
    assert_eq!(after.days[1].breakfast, before.days[1].breakfast);
    assert_eq!(after.days[1].lunch, before.days[1].lunch);
    assert_eq!(after.days[1].dinner, before.days[1].dinner);
}

#[test]
fn test_add_session_out_of_range_day_is_ignored() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    assert_eq!(
        scheduler.add_session(6, FlexPeriod::Night).unwrap(),
        EditOutcome::Ignored
    );
}

#[test]
fn test_sink_failure_keeps_previous_state() {
    let mut allow = true;
    let sink = move |_: &Timetable| {
        if allow {
            allow = false;
            Ok(())
        } else {
            Err(PlannerError::Configuration {
                message: "store unavailable".to_string(),
            })
        }
    };
    let mut scheduler = Scheduler::new(None, sink);
    scheduler
        .generate(flight_pair(date(2024, 8, 1), date(2024, 8, 2)))
        .unwrap();
    let before = scheduler.timetable().unwrap().clone();

    let result = scheduler.add_session(0, FlexPeriod::Morning);
    assert!(result.is_err());
    assert_eq!(scheduler.timetable().unwrap(), &before);
}

#[test]
fn test_sync_replaces_local_state() {
    let (_log, mut scheduler) = scheduler_with_days(date(2024, 8, 1), date(2024, 8, 2));
    assert!(scheduler.timetable().is_some());

    scheduler.sync(None);
    assert!(scheduler.timetable().is_none());
}
