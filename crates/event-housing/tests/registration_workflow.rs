//! End-to-end scenarios for registration intake through the public service facade and router,
//! backed by the SQLite record store and a CSV roster.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use event_housing::registration::{
    normalize, price, registration_router, validate, CsvRoster, FieldValue, RegistrationService,
    RegistrationServiceError, RegistrationSubmission, RosterProvider, SqliteRegistrationStore,
    StaticRoster, ValidationError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const ROSTER_CSV: &str = "employee,team\nAlice,Sales\nBob Levi,Platform\n";

fn roster_provider() -> StaticRoster {
    let roster = CsvRoster::from_reader(Cursor::new(ROSTER_CSV)).expect("roster parses");
    StaticRoster::new(roster)
}

fn submission(body: Value) -> RegistrationSubmission {
    serde_json::from_value(body).expect("submission decodes")
}

fn alice() -> Value {
    json!({
        "employee": "Alice",
        "spouseJoining": true,
        "numberOfChildren": 2,
        "numberOfChildrenOver18": 0,
        "shabbatObservance": false,
        "numberOfRooms": 1,
        "connectingDoorNeeded": false,
        "transportationNeeded": 0,
        "basketballTournamentNotification": false,
        "numberOfPeopleArriving": 4
    })
}

#[test]
fn reference_household_is_accepted_at_760() {
    let roster = roster_provider().known_employees().expect("roster");
    let submission = submission(alice());

    assert_eq!(validate(&submission, &roster), Ok(()));
    assert_eq!(price(&submission), Ok(760));
}

#[test]
fn client_supplied_total_price_is_ignored() {
    let mut body = alice();
    body["totalPrice"] = json!(1);

    let store = Arc::new(SqliteRegistrationStore::open_in_memory().expect("store"));
    let service = RegistrationService::new(Arc::new(roster_provider()), store.clone());
    let record = service.submit(submission(body)).expect("accepted");

    assert_eq!(record.registration.total_price, 760);
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn accepted_households_without_children_have_no_adult_children() {
    let body = json!({
        "employee": "Bob Levi",
        "numberOfChildren": 0,
        "numberOfChildrenOver18": 4,
        "numberOfRooms": 3,
        "transportationNeeded": 0,
        "numberOfPeopleArriving": 1
    });

    let store = Arc::new(SqliteRegistrationStore::open_in_memory().expect("store"));
    let service = RegistrationService::new(Arc::new(roster_provider()), store);
    let record = service.submit(submission(body)).expect("accepted");

    assert_eq!(record.registration.number_of_children_over18, 0);
    assert_eq!(record.registration.total_price, 1520);
}

#[test]
fn normalize_then_validate_matches_reference_gap() {
    let roster = roster_provider().known_employees().expect("roster");
    let mut raw = submission(alice());
    raw.number_of_children_over18 = Some(FieldValue::Integer(3));

    // The standard checks do not bound adult children by children.
    assert_eq!(validate(&normalize(raw), &roster), Ok(()));
}

#[test]
fn first_failing_check_wins() {
    let store = Arc::new(SqliteRegistrationStore::open_in_memory().expect("store"));
    let service = RegistrationService::new(Arc::new(roster_provider()), store.clone());
    let mut body = alice();
    body["employee"] = json!("");
    body["numberOfPeopleArriving"] = json!(5);

    match service.submit(submission(body)) {
        Err(RegistrationServiceError::Validation(ValidationError::InvalidEmployee)) => {}
        other => panic!("expected invalid employee, got {other:?}"),
    }
    assert_eq!(store.count().expect("count"), 0);
}

#[tokio::test]
async fn http_submission_persists_to_sqlite() {
    let store = Arc::new(SqliteRegistrationStore::open_in_memory().expect("store"));
    let service = Arc::new(RegistrationService::new(
        Arc::new(roster_provider()),
        store.clone(),
    ));
    let router = registration_router(service);
    let mut body = alice();
    body["shabbatObservance"] = json!(true);

    let response = router
        .oneshot(
            Request::post("/api/v1/registrations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("json")))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(payload["totalPrice"], 623);
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn csv_roster_file_is_reread_per_query() {
    let path = std::env::temp_dir().join(format!(
        "event-housing-roster-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, "employee\nAlice\n").expect("write roster");
    let provider = CsvRoster::new(&path);
    assert!(!provider
        .known_employees()
        .expect("roster")
        .contains("Bob Levi"));

    std::fs::write(&path, "employee\nAlice\nBob Levi\n").expect("rewrite roster");
    assert!(provider
        .known_employees()
        .expect("roster")
        .contains("Bob Levi"));

    std::fs::remove_file(&path).ok();
}
