//! Employee event housing registrations: intake shape, ordered validation, pricing, roster
//! lookup and append-only storage.

pub mod domain;
pub mod normalizer;
pub mod pricing;
pub mod roster;
pub mod router;
pub mod service;
pub mod sqlite;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    FieldValue, Registration, RegistrationId, RegistrationRecord, RegistrationSubmission,
    ROOM_OPTIONS,
};
pub use normalizer::normalize;
pub use pricing::{
    price, PriceComponent, PriceQuote, PriceTerm, PriceUnavailable, PricingConfig, PricingEngine,
    PricingInputs,
};
pub use roster::{CsvRoster, Roster, RosterError, RosterProvider, StaticRoster};
pub use router::registration_router;
pub use service::{RegistrationService, RegistrationServiceError};
pub use sqlite::SqliteRegistrationStore;
pub use store::{RegistrationStore, StoreError};
pub use validation::{validate, ValidationError, ValidationPolicy, Validator};
