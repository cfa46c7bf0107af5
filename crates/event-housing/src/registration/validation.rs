//! Ordered acceptance rules for registration submissions.
//!
//! Checks run in a fixed order and the first failure is reported. Callers rely on that order
//! when they surface a single reason back to the form.

use super::domain::RegistrationSubmission;
use super::roster::Roster;

/// Rejection reasons, one per check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid employee")]
    InvalidEmployee,
    #[error("numberOfChildren must be a non-negative integer")]
    InvalidChildren,
    #[error("numberOfChildrenOver18 must be a non-negative integer")]
    InvalidChildrenOver18,
    #[error("numberOfPeopleArriving must be a positive integer")]
    InvalidPeopleArriving,
    #[error("numberOfPeopleArriving mismatch")]
    PeopleArrivingMismatch,
    #[error("transportationNeeded must be a non-negative integer or zero")]
    InvalidTransportation,
    #[error("numberOfChildrenOver18 exceeds numberOfChildren")]
    ChildrenOver18ExceedsChildren,
    #[error("transportationNeeded exceeds numberOfPeopleArriving")]
    TransportationExceedsParty,
}

/// Which optional checks run on top of the standard six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    /// Also bound adult children by children and seats by party size.
    pub enforce_household_bounds: bool,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self {
            enforce_household_bounds: true,
        }
    }
}

/// Stateless validator. Holds only its policy, so it can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn validate(
        &self,
        submission: &RegistrationSubmission,
        roster: &Roster,
    ) -> Result<(), ValidationError> {
        let employee = submission
            .employee_name()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::InvalidEmployee)?;
        if !roster.contains(employee) {
            return Err(ValidationError::InvalidEmployee);
        }

        let children = submission
            .children()
            .ok_or(ValidationError::InvalidChildren)?;
        let children_over18 = submission
            .children_over18()
            .ok_or(ValidationError::InvalidChildrenOver18)?;
        let people = submission
            .people_arriving()
            .filter(|people| *people > 0)
            .ok_or(ValidationError::InvalidPeopleArriving)?;

        if submission.expected_people_arriving() != Some(people) {
            return Err(ValidationError::PeopleArrivingMismatch);
        }

        let transportation = submission
            .transportation()
            .ok_or(ValidationError::InvalidTransportation)?;

        if self.policy.enforce_household_bounds {
            if children_over18 > children {
                return Err(ValidationError::ChildrenOver18ExceedsChildren);
            }
            if transportation > people {
                return Err(ValidationError::TransportationExceedsParty);
            }
        }

        Ok(())
    }
}

/// Runs the standard checks against `roster`.
pub fn validate(
    submission: &RegistrationSubmission,
    roster: &Roster,
) -> Result<(), ValidationError> {
    Validator::default().validate(submission, roster)
}
