// Lifecycle events emitted by the engine.
//
// All tests share one global capture buffer, so each test uses a driver id
// no other test touches and filters on it.

mod common;

use common::{jane, FailingRepository, InMemoryRepository};
use drivers_core::logging_facility::test_capture::{init_test_capture, CapturedEvent};
use drivers_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COUNT, FIELD_DRIVER_ID, FIELD_ERR_CAUSE,
    FIELD_ERR_CODE, FIELD_FOUND, FIELD_ROWS,
};
use drivers_engine::{DriverService, OperationService};

fn with_driver_id(events: Vec<CapturedEvent>, id: i64) -> Vec<CapturedEvent> {
    let id = id.to_string();
    events
        .into_iter()
        .filter(|e| e.field(FIELD_DRIVER_ID) == Some(id.as_str()))
        .collect()
}

fn event_names(events: &[CapturedEvent]) -> Vec<&str> {
    events.iter().filter_map(|e| e.event.as_deref()).collect()
}

#[test]
fn test_get_emits_start_end_and_warning_when_absent() {
    let capture = init_test_capture();
    let service = DriverService::new(InMemoryRepository::default());

    service.get(7001).unwrap();

    let events = with_driver_id(capture.events_for("driver_get"), 7001);
    assert_eq!(event_names(&events), vec![EVENT_START, EVENT_END]);
    assert_eq!(events[1].field(FIELD_FOUND), Some("false"));
    assert!(events.iter().any(|e| e.level == tracing::Level::WARN));
}

#[test]
fn test_failure_emits_end_error_with_driver_id_and_code() {
    let capture = init_test_capture();
    let service = DriverService::new(FailingRepository);

    assert!(service.delete(7002).is_err());

    let events = with_driver_id(capture.events_for("driver_delete"), 7002);
    assert_eq!(event_names(&events), vec![EVENT_START, EVENT_END_ERROR]);

    let error = &events[1];
    assert_eq!(error.level, tracing::Level::ERROR);
    assert_eq!(error.field(FIELD_ERR_CODE), Some("ERR_PERSISTENCE"));
    assert_eq!(error.field(FIELD_ERR_CAUSE), Some("database is locked"));
}

#[test]
fn test_update_failure_carries_driver_id() {
    let capture = init_test_capture();
    let service = DriverService::new(FailingRepository);

    assert!(service.update(&jane().with_id(7004)).is_err());

    let events = with_driver_id(capture.events_for("driver_update"), 7004);
    assert_eq!(event_names(&events), vec![EVENT_START, EVENT_END_ERROR]);
}

#[test]
fn test_contact_fields_are_redacted() {
    let capture = init_test_capture();
    let service = DriverService::new(InMemoryRepository::default());

    service.add(&jane()).unwrap();

    let leaked = capture.count_events(|e| {
        e.fields
            .values()
            .any(|v| v.contains("jane.mickel@example.com") || v.contains("(555) 201-3344"))
    });
    assert_eq!(leaked, 0);
    capture.assert_event_exists("driver_add", EVENT_END);
}

#[test]
fn test_alphabetize_by_id_events() {
    let capture = init_test_capture();
    let drivers = DriverService::new(InMemoryRepository::default());
    let ops = OperationService::new(&drivers);

    assert_eq!(ops.alphabetize_by_id(7003).unwrap(), None);

    let events = with_driver_id(capture.events_for("alphabetize_by_id"), 7003);
    assert_eq!(event_names(&events), vec![EVENT_START, EVENT_END]);
}

#[test]
fn test_create_random_drivers_events() {
    let capture = init_test_capture();
    let service = DriverService::new(InMemoryRepository::default());

    service.create_random_drivers(4).unwrap();

    let starts: Vec<_> = capture
        .events_for("create_random_drivers")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START) && e.field(FIELD_COUNT) == Some("4"))
        .collect();
    assert_eq!(starts.len(), 1);
    capture.assert_event_exists("create_random_drivers", EVENT_END);
    assert!(capture
        .events_for("driver_bulk_insert")
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_ROWS) == Some("4")));
}
