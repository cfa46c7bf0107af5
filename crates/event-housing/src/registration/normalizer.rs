use super::domain::{FieldValue, RegistrationSubmission};

/// Smallest party that is offered the basketball tournament sign-up.
pub const BASKETBALL_MIN_PARTY: u32 = 6;

/// Applies the form's cross-field couplings to a raw submission.
///
/// A household without children cannot have adult children, and the basketball tournament
/// option only exists for parties larger than five. Nothing else is touched and nothing is
/// rejected here; the validator still decides acceptance.
pub fn normalize(mut submission: RegistrationSubmission) -> RegistrationSubmission {
    if submission.number_of_children.as_ref().and_then(FieldValue::as_integer) == Some(0) {
        submission.number_of_children_over18 = Some(FieldValue::Integer(0));
    }

    let tournament_offered = submission
        .people_arriving()
        .is_some_and(|people| people >= BASKETBALL_MIN_PARTY);
    if !tournament_offered {
        submission.basketball_tournament_notification = false;
    }

    submission
}
