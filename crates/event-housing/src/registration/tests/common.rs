use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::registration::domain::{
    FieldValue, Registration, RegistrationId, RegistrationRecord, RegistrationSubmission,
};
use crate::registration::roster::{Roster, RosterError, RosterProvider, StaticRoster};
use crate::registration::service::RegistrationService;
use crate::registration::store::{RegistrationStore, StoreError};

pub(super) fn roster() -> Roster {
    Roster::new(["Alice", "Bob Levi", "Dana Cohen"])
}

/// Alice with her spouse and two young children, one room, no extras.
pub(super) fn alice_submission() -> RegistrationSubmission {
    RegistrationSubmission {
        employee: Some(FieldValue::from("Alice")),
        spouse_joining: true,
        number_of_children: Some(FieldValue::Integer(2)),
        number_of_children_over18: Some(FieldValue::Integer(0)),
        shabbat_observance: false,
        number_of_rooms: Some(FieldValue::Integer(1)),
        connecting_door_needed: false,
        transportation_needed: Some(FieldValue::Integer(0)),
        basketball_tournament_notification: false,
        number_of_people_arriving: Some(FieldValue::Integer(4)),
    }
}

/// Single employee, no family, with the given room count.
pub(super) fn solo_submission(rooms: i64) -> RegistrationSubmission {
    RegistrationSubmission {
        employee: Some(FieldValue::from("Bob Levi")),
        spouse_joining: false,
        number_of_children: Some(FieldValue::Integer(0)),
        number_of_children_over18: Some(FieldValue::Integer(0)),
        shabbat_observance: false,
        number_of_rooms: Some(FieldValue::Integer(rooms)),
        connecting_door_needed: false,
        transportation_needed: Some(FieldValue::Integer(0)),
        basketball_tournament_notification: false,
        number_of_people_arriving: Some(FieldValue::Integer(1)),
    }
}

pub(super) fn build_service() -> (
    RegistrationService<StaticRoster, MemoryStore>,
    Arc<MemoryStore>,
) {
    let store = Arc::new(MemoryStore::default());
    let service =
        RegistrationService::new(Arc::new(StaticRoster::new(roster())), store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    rows: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl MemoryStore {
    pub(super) fn rows(&self) -> Vec<RegistrationRecord> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

impl RegistrationStore for MemoryStore {
    fn insert(&self, registration: Registration) -> Result<RegistrationRecord, StoreError> {
        let mut guard = self.rows.lock().expect("store mutex poisoned");
        let record = RegistrationRecord {
            id: RegistrationId(guard.len() as i64 + 1),
            registration,
            created_at: Utc::now(),
        };
        guard.push(record.clone());
        Ok(record)
    }
}

pub(super) struct UnavailableStore;

impl RegistrationStore for UnavailableStore {
    fn insert(&self, _registration: Registration) -> Result<RegistrationRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct UnavailableRoster;

impl RosterProvider for UnavailableRoster {
    fn known_employees(&self) -> Result<Roster, RosterError> {
        Err(RosterError::Unavailable("directory offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
