use wayfarer_core::{
    geometry::LatLng,
    models::{NewSegment, TransportMode, Waypoint},
    Database, ItineraryError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_segment(start: &str, end: &str, transport: &str, price: &str) -> NewSegment {
    NewSegment {
        start: Waypoint::new(start, LatLng::new(30.0, 120.0)),
        end: Waypoint::new(end, LatLng::new(31.0, 121.0)),
        transport: transport.parse().unwrap(),
        price: price.to_string(),
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    // Database should be initialized and ready to use
    assert!(_temp_file.path().exists());
}

#[test]
fn test_reopen_existing_database() {
    let (temp_file, mut db) = create_test_db();
    db.create_trip("Persisted").expect("Failed to create trip");
    drop(db);

    let reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    let trips = reopened.list_trips().expect("Failed to list trips");
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].name, "Persisted");
}

#[test]
fn test_create_trip() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Weekend in Kyoto").expect("Failed to create trip");

    assert_eq!(trip.name, "Weekend in Kyoto");
    assert!(trip.id > 0);
    assert!(!trip.favorite);
    assert!(!trip.expanded);
}

#[test]
fn test_get_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_trip("Lookup").expect("Failed to create trip");
    let retrieved = db
        .get_trip(created.id)
        .expect("Failed to get trip")
        .expect("Trip should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "Lookup");
    assert_eq!(retrieved.created_at, created.created_at);
    assert!(db.get_trip(999).expect("Failed to get trip").is_none());
}

#[test]
fn test_list_trips_favorites_first_then_newest() {
    let (_temp_file, mut db) = create_test_db();

    let t1 = db.create_trip("One").expect("Failed to create trip 1");
    let t2 = db.create_trip("Two").expect("Failed to create trip 2");
    let t3 = db.create_trip("Three").expect("Failed to create trip 3");
    db.toggle_favorite(t2.id).expect("Failed to favorite trip 2");

    let ids: Vec<u64> = db
        .list_trips()
        .expect("Failed to list trips")
        .iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![t2.id, t3.id, t1.id]);
}

#[test]
fn test_rename_trip_trims() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Old").expect("Failed to create trip");
    let renamed = db.rename_trip(trip.id, "  New name  ").expect("Failed to rename");

    assert_eq!(renamed.name, "New name");
    assert_eq!(renamed.id, trip.id);
}

#[test]
fn test_rename_trip_blank_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Keep me").expect("Failed to create trip");
    let unchanged = db.rename_trip(trip.id, " \t ").expect("Blank rename should not fail");

    assert_eq!(unchanged.name, "Keep me");
    let stored = db.get_trip(trip.id).unwrap().unwrap();
    assert_eq!(stored.name, "Keep me");
}

#[test]
fn test_rename_nonexistent_trip() {
    let (_temp_file, mut db) = create_test_db();

    match db.rename_trip(42, "Name").unwrap_err() {
        ItineraryError::TripNotFound { id } => assert_eq!(id, 42),
        other => panic!("Expected TripNotFound error, got {other:?}"),
    }
}

#[test]
fn test_toggle_favorite_twice() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Fav").expect("Failed to create trip");
    assert!(db.toggle_favorite(trip.id).unwrap().favorite);
    assert!(!db.toggle_favorite(trip.id).unwrap().favorite);

    assert!(matches!(
        db.toggle_favorite(999),
        Err(ItineraryError::TripNotFound { id: 999 })
    ));
}

#[test]
fn test_add_segment() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Segments").expect("Failed to create trip");
    let segment = db
        .add_segment(trip.id, &new_segment("A", "B", "高铁", "55.5"))
        .expect("Failed to add segment");

    assert_eq!(segment.trip_id, trip.id);
    assert_eq!(segment.start.name, "A");
    assert_eq!(segment.end.name, "B");
    assert_eq!(segment.transport, TransportMode::HighSpeedRail);
    assert_eq!(segment.price, "55.5");
}

#[test]
fn test_add_segment_requires_trip() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.add_segment(999, &new_segment("A", "B", "汽车", "1"));
    assert!(matches!(result, Err(ItineraryError::TripNotFound { id: 999 })));

    // The database should still be functional
    let trip = db.create_trip("After error").expect("Should create trip after error");
    assert!(trip.id > 0);
    assert!(db.get_segments(999).unwrap().is_empty());
}

#[test]
fn test_segments_in_insertion_order() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Order").expect("Failed to create trip");
    for name in ["first", "second", "third"] {
        db.add_segment(trip.id, &new_segment(name, "x", "汽车", "0"))
            .expect("Failed to add segment");
    }

    let segments = db.get_segments(trip.id).expect("Failed to get segments");
    let names: Vec<&str> = segments.iter().map(|s| s.start.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(segments.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_segment_fields_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Exact").expect("Failed to create trip");
    let draft = NewSegment {
        start: Waypoint::new("Origin", LatLng::new(0.0, 0.0)),
        end: Waypoint::new("Destination", LatLng::new(1.0, 1.0)),
        transport: "飞机".parse().unwrap(),
        price: "100".to_string(),
    };
    db.add_segment(trip.id, &draft).expect("Failed to add segment");

    let segments = db.get_segments(trip.id).expect("Failed to get segments");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, draft.start);
    assert_eq!(segments[0].end, draft.end);
    assert_eq!(segments[0].transport.as_str(), "飞机");
    assert_eq!(segments[0].price, "100");
}

#[test]
fn test_unknown_transport_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Ferry").expect("Failed to create trip");
    db.add_segment(trip.id, &new_segment("Port", "Island", "ferry", "30"))
        .expect("Failed to add segment");

    let segments = db.get_segments(trip.id).unwrap();
    assert_eq!(segments[0].transport, TransportMode::Other("ferry".to_string()));
}

#[test]
fn test_clear_segments_keeps_trip() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Clear").expect("Failed to create trip");
    db.add_segment(trip.id, &new_segment("A", "B", "汽车", "1")).unwrap();
    db.add_segment(trip.id, &new_segment("B", "C", "汽车", "2")).unwrap();

    let removed = db.clear_segments(trip.id).expect("Failed to clear segments");
    assert_eq!(removed, 2);
    assert!(db.get_segments(trip.id).unwrap().is_empty());
    assert!(db.get_trip(trip.id).unwrap().is_some());
}

#[test]
fn test_delete_trip_cascades() {
    let (_temp_file, mut db) = create_test_db();

    let trip = db.create_trip("Doomed").expect("Failed to create trip");
    let other = db.create_trip("Survivor").expect("Failed to create trip");
    for _ in 0..3 {
        db.add_segment(trip.id, &new_segment("A", "B", "火车", "10")).unwrap();
    }
    db.add_segment(other.id, &new_segment("C", "D", "地铁", "3")).unwrap();

    db.delete_trip(trip.id).expect("Failed to delete trip");

    assert!(db.get_trip(trip.id).unwrap().is_none());
    assert!(db.get_segments(trip.id).unwrap().is_empty());
    assert_eq!(db.get_segments(other.id).unwrap().len(), 1);
}

#[test]
fn test_delete_nonexistent_trip() {
    let (_temp_file, mut db) = create_test_db();

    match db.delete_trip(999).unwrap_err() {
        ItineraryError::TripNotFound { id } => assert_eq!(id, 999),
        other => panic!("Expected TripNotFound error, got {other:?}"),
    }
}

#[test]
fn test_migrates_database_without_favorites() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE trips (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, created_at TEXT NOT NULL);
             INSERT INTO trips (name, created_at) VALUES ('Legacy', '2024-05-01T08:00:00Z');",
        )
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let trips = db.list_trips().expect("Failed to list trips");
    assert_eq!(trips.len(), 1);
    assert!(!trips[0].favorite);
    assert!(db.toggle_favorite(trips[0].id).unwrap().favorite);
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open in-memory database");
    let trip = db.create_trip("Scratch").unwrap();
    assert_eq!(db.list_trips().unwrap()[0].id, trip.id);
}
