use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Registration, RegistrationRecord, RegistrationSubmission};
use super::normalizer::normalize;
use super::pricing::{PriceQuote, PriceUnavailable, PricingEngine};
use super::roster::{Roster, RosterError, RosterProvider};
use super::store::{RegistrationStore, StoreError};
use super::validation::{ValidationError, ValidationPolicy, Validator};

/// Service composing the roster, validator, pricing engine and record store.
pub struct RegistrationService<P, S> {
    roster: Arc<P>,
    store: Arc<S>,
    validator: Validator,
    pricing: PricingEngine,
}

impl<P, S> RegistrationService<P, S>
where
    P: RosterProvider + 'static,
    S: RegistrationStore + 'static,
{
    pub fn new(roster: Arc<P>, store: Arc<S>) -> Self {
        Self::with_engines(
            roster,
            store,
            Validator::default(),
            PricingEngine::default(),
        )
    }

    pub fn with_policy(roster: Arc<P>, store: Arc<S>, policy: ValidationPolicy) -> Self {
        Self::with_engines(
            roster,
            store,
            Validator::new(policy),
            PricingEngine::default(),
        )
    }

    pub fn with_engines(
        roster: Arc<P>,
        store: Arc<S>,
        validator: Validator,
        pricing: PricingEngine,
    ) -> Self {
        Self {
            roster,
            store,
            validator,
            pricing,
        }
    }

    pub fn employees(&self) -> Result<Roster, RegistrationServiceError> {
        Ok(self.roster.known_employees()?)
    }

    /// Run the ordered checks without pricing or storing anything.
    pub fn validate(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<(), RegistrationServiceError> {
        let submission = normalize(submission);
        let roster = self.roster.known_employees()?;
        self.validator
            .validate(&submission, &roster)
            .inspect_err(|reason| warn!(%reason, "registration rejected"))?;
        Ok(())
    }

    /// Price a submission for preview. Validation is deliberately not required.
    pub fn quote(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<PriceQuote, RegistrationServiceError> {
        let submission = normalize(submission);
        Ok(self.pricing.quote(&submission)?)
    }

    /// Validate, price and persist a new registration.
    pub fn submit(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<RegistrationRecord, RegistrationServiceError> {
        let submission = normalize(submission);
        let roster = self.roster.known_employees()?;

        self.validator
            .validate(&submission, &roster)
            .inspect_err(|reason| warn!(%reason, "registration rejected"))?;

        let quote = self.pricing.quote(&submission).inspect_err(|reason| {
            warn!(%reason, "validated registration could not be priced");
        })?;
        let registration = accept(&submission, &quote)?;

        let record = self.store.insert(registration).inspect_err(|err| {
            warn!(error = %err, "failed to store registration");
        })?;

        info!(
            registration_id = record.id.0,
            employee = %record.registration.employee,
            total_price = record.registration.total_price,
            "registration stored"
        );
        Ok(record)
    }
}

/// Builds the typed registration from a submission that already passed validation and pricing.
fn accept(
    submission: &RegistrationSubmission,
    quote: &PriceQuote,
) -> Result<Registration, ValidationError> {
    let employee = submission
        .employee_name()
        .ok_or(ValidationError::InvalidEmployee)?;

    Ok(Registration {
        employee: employee.to_string(),
        spouse_joining: submission.spouse_joining,
        number_of_children: submission
            .children()
            .ok_or(ValidationError::InvalidChildren)?,
        number_of_children_over18: submission
            .children_over18()
            .ok_or(ValidationError::InvalidChildrenOver18)?,
        shabbat_observance: submission.shabbat_observance,
        number_of_rooms: quote.inputs.rooms,
        connecting_door_needed: submission.connecting_door_needed,
        transportation_needed: submission
            .transportation()
            .ok_or(ValidationError::InvalidTransportation)?,
        basketball_tournament_notification: submission.basketball_tournament_notification,
        number_of_people_arriving: submission
            .people_arriving()
            .ok_or(ValidationError::InvalidPeopleArriving)?,
        total_price: quote.total_price,
    })
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pricing(#[from] PriceUnavailable),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Roster(#[from] RosterError),
}
