use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::debug;

use super::domain::{Registration, RegistrationId, RegistrationRecord};
use super::store::{RegistrationStore, StoreError};

/// Single-table SQLite store. The connection is serialised behind a mutex.
pub struct SqliteRegistrationStore {
    connection: Mutex<Connection>,
}

impl SqliteRegistrationStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let connection = Connection::open(path)?;
        let mode: String =
            connection.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(journal_mode = %mode, "opened registration database");
        Self::with_connection(connection)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, StoreError> {
        setup_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        let connection = self.lock()?;
        let count = connection.query_row("SELECT COUNT(*) FROM registrations", [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.connection
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }
}

fn setup_schema(connection: &Connection) -> Result<(), StoreError> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS registrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee TEXT NOT NULL,
            spouseJoining INTEGER NOT NULL,
            numberOfChildren INTEGER NOT NULL,
            numberOfChildrenOver18 INTEGER NOT NULL,
            shabbatObservance INTEGER NOT NULL,
            numberOfRooms INTEGER NOT NULL,
            connectingDoorNeeded INTEGER NOT NULL,
            transportationNeeded INTEGER NOT NULL,
            basketballTournamentNotification INTEGER NOT NULL,
            totalPrice INTEGER NOT NULL,
            numberOfPeopleArriving INTEGER NOT NULL,
            createdAt TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

impl RegistrationStore for SqliteRegistrationStore {
    fn insert(&self, registration: Registration) -> Result<RegistrationRecord, StoreError> {
        let created_at = Utc::now();
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO registrations (
                employee,
                spouseJoining,
                numberOfChildren,
                numberOfChildrenOver18,
                shabbatObservance,
                numberOfRooms,
                connectingDoorNeeded,
                transportationNeeded,
                basketballTournamentNotification,
                totalPrice,
                numberOfPeopleArriving,
                createdAt
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                registration.employee,
                registration.spouse_joining,
                registration.number_of_children,
                registration.number_of_children_over18,
                registration.shabbat_observance,
                registration.number_of_rooms,
                registration.connecting_door_needed,
                registration.transportation_needed,
                registration.basketball_tournament_notification,
                registration.total_price,
                registration.number_of_people_arriving,
                created_at.to_rfc3339(),
            ],
        )?;
        let id = RegistrationId(connection.last_insert_rowid());

        Ok(RegistrationRecord {
            id,
            registration,
            created_at,
        })
    }
}
