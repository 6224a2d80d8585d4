// Alphabetize orchestration over stored drivers.

mod common;

use common::{jane, john, FailingRepository, InMemoryRepository};
use drivers_core::errors::ExErrorKind;
use drivers_core::Driver;
use drivers_engine::{DriverService, OperationService};
use drivers_store::SqliteDriverRepository;
use tempfile::TempDir;

#[test]
fn test_alphabetize_single_driver() {
    let drivers = DriverService::new(InMemoryRepository::default());
    let ops = OperationService::new(&drivers);

    assert_eq!(ops.alphabetize(&john()).unwrap(), "hJno Deo");
    assert_eq!(ops.alphabetize(&jane()).unwrap(), "aeJn ceiklM");
}

#[test]
fn test_alphabetize_missing_first_name() {
    let drivers = DriverService::new(InMemoryRepository::default());
    let ops = OperationService::new(&drivers);

    let err = ops
        .alphabetize(&Driver::new("", "Doe", "x@example.com", "(555) 555-5555"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.field(), Some("firstName"));
}

#[test]
fn test_alphabetize_all_in_fetch_order() {
    let drivers = DriverService::new(InMemoryRepository::with_drivers(&[john(), jane()]));
    let ops = OperationService::new(&drivers);

    assert_eq!(ops.alphabetize_all().unwrap(), vec!["hJno Deo", "aeJn ceiklM"]);
}

#[test]
fn test_alphabetize_all_empty_store() {
    let drivers = DriverService::new(InMemoryRepository::default());
    let ops = OperationService::new(&drivers);

    assert!(ops.alphabetize_all().unwrap().is_empty());
}

#[test]
fn test_alphabetize_all_propagates_storage_error() {
    let drivers = DriverService::new(FailingRepository);
    let ops = OperationService::new(&drivers);

    let err = ops.alphabetize_all().unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_alphabetize_by_id() {
    let drivers = DriverService::new(InMemoryRepository::with_drivers(&[john(), jane()]));
    let ops = OperationService::new(&drivers);
    let jane_id = drivers.list().unwrap()[1].id;

    assert_eq!(ops.alphabetize_by_id(jane_id).unwrap().as_deref(), Some("aeJn ceiklM"));
    assert_eq!(ops.alphabetize_by_id(999).unwrap(), None);
}

#[test]
fn test_alphabetize_all_over_seeded_sqlite() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteDriverRepository::new(dir.path().join("drivers.db"));
    repo.bootstrap().unwrap();
    let drivers = DriverService::new(repo);
    drivers.add(&jane()).unwrap();

    let ops = OperationService::new(&drivers);
    assert_eq!(ops.alphabetize_all().unwrap(), vec!["hJno Deo", "aeJn ceiklM"]);
}

#[test]
fn test_blank_name_never_reaches_alphabetize_all() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteDriverRepository::new(dir.path().join("drivers.db"));
    repo.bootstrap().unwrap();
    let drivers = DriverService::new(repo);

    let err = drivers
        .add(&Driver::new("", "Smith", "smith@example.com", "(555) 201-7777"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let ops = OperationService::new(&drivers);
    assert_eq!(ops.alphabetize_all().unwrap(), vec!["hJno Deo"]);
}
