use super::domain::{Registration, RegistrationRecord};

/// Append-only storage for accepted registrations.
pub trait RegistrationStore: Send + Sync {
    /// Persist a new row. Implementations never update or delete existing rows.
    fn insert(&self, registration: Registration) -> Result<RegistrationRecord, StoreError>;
}

/// Persistence failure surfaced to callers as a generic storage error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("registration store unavailable: {0}")]
    Unavailable(String),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
