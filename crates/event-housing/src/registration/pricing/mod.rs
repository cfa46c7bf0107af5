//! Deterministic registration pricing.
//!
//! The price is a base rate plus per-person and per-amenity terms, summed in a fixed order,
//! multiplied by the Shabbat factor and rounded once. Pricing may run on submissions that
//! have not been validated yet (live previews), so missing inputs produce
//! [`PriceUnavailable`] instead of a made-up number.

mod config;
mod formula;

pub use config::PricingConfig;

use super::domain::{FieldValue, RegistrationSubmission};
use formula::{apply_formula, round_half_up};
use serde::{Deserialize, Serialize};

/// Why no price can be shown for a submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceUnavailable {
    #[error("price unavailable: {field} is missing or not a whole number")]
    MissingField { field: &'static str },
    #[error("price unavailable: computed total {total} is not positive")]
    NonPositive { total: f64 },
    #[error("price unavailable: computed total {total} is out of range")]
    OutOfRange { total: f64 },
}

/// Typed inputs the formula consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInputs {
    pub spouse_joining: bool,
    pub children: i64,
    pub children_over18: i64,
    pub transportation: i64,
    pub rooms: i64,
    pub shabbat_observance: bool,
}

impl PricingInputs {
    pub fn from_submission(
        submission: &RegistrationSubmission,
    ) -> Result<Self, PriceUnavailable> {
        Ok(Self {
            spouse_joining: submission.spouse_joining,
            children: required(&submission.number_of_children, "numberOfChildren")?,
            children_over18: required(
                &submission.number_of_children_over18,
                "numberOfChildrenOver18",
            )?,
            transportation: required(&submission.transportation_needed, "transportationNeeded")?,
            rooms: required(&submission.number_of_rooms, "numberOfRooms")?,
            shabbat_observance: submission.shabbat_observance,
        })
    }
}

fn required(field: &Option<FieldValue>, name: &'static str) -> Result<i64, PriceUnavailable> {
    field
        .as_ref()
        .and_then(FieldValue::as_integer)
        .ok_or(PriceUnavailable::MissingField { field: name })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTerm {
    Base,
    Spouse,
    Children,
    ChildrenOver18,
    Transportation,
    Rooms,
    ShabbatDiscount,
}

/// One line of the itemised price, in formula order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComponent {
    pub term: PriceTerm,
    pub amount: f64,
    pub notes: String,
}

/// Priced submission with the breakdown used for previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub total_price: u32,
    pub components: Vec<PriceComponent>,
    pub inputs: PricingInputs,
}

/// Stateless pricing engine parameterised by its rate card.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn quote(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<PriceQuote, PriceUnavailable> {
        let inputs = PricingInputs::from_submission(submission)?;
        let (components, unrounded) = apply_formula(&inputs, &self.config);
        let total = round_half_up(unrounded);

        if total <= 0.0 {
            return Err(PriceUnavailable::NonPositive { total });
        }
        if !total.is_finite() || total > f64::from(u32::MAX) {
            return Err(PriceUnavailable::OutOfRange { total });
        }

        Ok(PriceQuote {
            total_price: total as u32,
            components,
            inputs,
        })
    }

    pub fn price(&self, submission: &RegistrationSubmission) -> Result<u32, PriceUnavailable> {
        self.quote(submission).map(|quote| quote.total_price)
    }
}

/// Prices a submission with the standard rate card.
pub fn price(submission: &RegistrationSubmission) -> Result<u32, PriceUnavailable> {
    PricingEngine::default().price(submission)
}
