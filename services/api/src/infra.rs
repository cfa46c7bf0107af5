use chrono::Utc;
use event_housing::registration::{
    Registration, RegistrationId, RegistrationRecord, RegistrationStore, Roster, StoreError,
    ValidationPolicy,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local registration table used when no database is configured.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRegistrationStore {
    rows: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl RegistrationStore for InMemoryRegistrationStore {
    fn insert(&self, registration: Registration) -> Result<RegistrationRecord, StoreError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("registration table lock poisoned".to_string()))?;
        let record = RegistrationRecord {
            id: RegistrationId(guard.len() as i64 + 1),
            registration,
            created_at: Utc::now(),
        };
        guard.push(record.clone());
        Ok(record)
    }
}

impl InMemoryRegistrationStore {
    pub(crate) fn rows(&self) -> Vec<RegistrationRecord> {
        self.rows
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn validation_policy(strict: bool) -> ValidationPolicy {
    if strict {
        ValidationPolicy::strict()
    } else {
        ValidationPolicy::default()
    }
}

pub(crate) fn demo_roster() -> Roster {
    Roster::new(["Alice", "Bob Levi", "Dana Cohen", "Yossi Mizrahi"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(employee: &str) -> Registration {
        Registration {
            employee: employee.to_string(),
            spouse_joining: false,
            number_of_children: 0,
            number_of_children_over18: 0,
            shabbat_observance: false,
            number_of_rooms: 1,
            connecting_door_needed: false,
            transportation_needed: 1,
            basketball_tournament_notification: false,
            number_of_people_arriving: 1,
            total_price: 545,
        }
    }

    #[test]
    fn in_memory_store_appends_rows() {
        let store = InMemoryRegistrationStore::default();
        let first = store.insert(registration("Alice")).expect("insert");
        let second = store.insert(registration("Bob Levi")).expect("insert");

        assert_eq!(first.id, RegistrationId(1));
        assert_eq!(second.id, RegistrationId(2));
        assert_eq!(store.rows().len(), 2);
    }

    #[test]
    fn strict_flag_selects_strict_policy() {
        assert!(validation_policy(true).enforce_household_bounds);
        assert!(!validation_policy(false).enforce_household_bounds);
    }
}
