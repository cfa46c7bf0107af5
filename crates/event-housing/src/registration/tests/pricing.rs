use super::common::*;
use crate::registration::domain::FieldValue;
use crate::registration::pricing::{
    price, PriceTerm, PriceUnavailable, PricingConfig, PricingEngine,
};

#[test]
fn spouse_and_two_children_cost_760() {
    assert_eq!(price(&alice_submission()), Ok(760));
}

#[test]
fn shabbat_discount_applies_after_the_sum() {
    let mut submission = alice_submission();
    submission.shabbat_observance = true;

    // 760 * 0.82 = 623.2
    assert_eq!(price(&submission), Ok(623));
}

#[test]
fn extra_rooms_cost_500_each() {
    assert_eq!(price(&solo_submission(1)), Ok(520));
    assert_eq!(price(&solo_submission(3)), Ok(1520));
    assert_eq!(price(&solo_submission(5)), Ok(2520));
}

#[test]
fn rooms_outside_the_offered_range_are_not_clamped() {
    assert_eq!(price(&solo_submission(7)), Ok(3520));
    assert_eq!(price(&solo_submission(0)), Ok(20));
}

#[test]
fn every_term_contributes_in_order() {
    let mut submission = alice_submission();
    submission.number_of_children = Some(FieldValue::Integer(3));
    submission.number_of_children_over18 = Some(FieldValue::Integer(1));
    submission.transportation_needed = Some(FieldValue::Integer(4));
    submission.number_of_rooms = Some(FieldValue::Integer(2));

    // 520 + 120 + 180 + 250 + 100 + 500
    assert_eq!(price(&submission), Ok(1670));

    submission.shabbat_observance = true;
    // 1670 * 0.82 = 1369.4
    assert_eq!(price(&submission), Ok(1369));
}

#[test]
fn discounted_round_sums_stay_exact() {
    let mut submission = alice_submission();
    submission.number_of_children = Some(FieldValue::Integer(6));
    submission.shabbat_observance = true;

    // (520 + 120 + 360) * 0.82 = 820
    assert_eq!(price(&submission), Ok(820));
}

#[test]
fn pricing_is_idempotent() {
    let mut submission = alice_submission();
    submission.shabbat_observance = true;
    submission.transportation_needed = Some(FieldValue::Integer(3));

    let first = price(&submission);
    let second = price(&submission);
    assert_eq!(first, second);
}

#[test]
fn missing_inputs_make_the_price_unavailable() {
    let mut submission = alice_submission();
    submission.number_of_children_over18 = None;

    assert_eq!(
        price(&submission),
        Err(PriceUnavailable::MissingField {
            field: "numberOfChildrenOver18"
        })
    );

    let mut submission = alice_submission();
    submission.number_of_rooms = Some(FieldValue::from("two"));
    assert_eq!(
        price(&submission),
        Err(PriceUnavailable::MissingField {
            field: "numberOfRooms"
        })
    );
}

#[test]
fn pricing_does_not_require_a_valid_employee() {
    let mut submission = alice_submission();
    submission.employee = None;
    submission.number_of_people_arriving = None;

    assert_eq!(price(&submission), Ok(760));
}

#[test]
fn non_positive_totals_are_unavailable() {
    match price(&solo_submission(-1)) {
        Err(PriceUnavailable::NonPositive { total }) => assert_eq!(total, -480.0),
        other => panic!("expected non-positive total, got {other:?}"),
    }
}

#[test]
fn quote_itemises_terms_in_formula_order() {
    let mut submission = alice_submission();
    submission.shabbat_observance = true;
    submission.number_of_rooms = Some(FieldValue::Integer(2));

    let quote = PricingEngine::default()
        .quote(&submission)
        .expect("quote builds");

    let terms: Vec<PriceTerm> = quote.components.iter().map(|c| c.term).collect();
    assert_eq!(
        terms,
        vec![
            PriceTerm::Base,
            PriceTerm::Spouse,
            PriceTerm::Children,
            PriceTerm::ChildrenOver18,
            PriceTerm::Transportation,
            PriceTerm::Rooms,
            PriceTerm::ShabbatDiscount,
        ]
    );
    // 1260 * 0.82 = 1033.2
    assert_eq!(quote.total_price, 1033);
    assert_eq!(quote.inputs.rooms, 2);
}

#[test]
fn custom_rate_card_is_respected() {
    let engine = PricingEngine::new(PricingConfig {
        base: 400,
        shabbat_multiplier: 1.0,
        ..PricingConfig::default()
    });
    let mut submission = alice_submission();
    submission.shabbat_observance = true;

    assert_eq!(engine.price(&submission), Ok(640));
}
