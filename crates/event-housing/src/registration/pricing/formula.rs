use super::config::PricingConfig;
use super::{PriceComponent, PriceTerm, PricingInputs};

/// Accumulates the formula terms in their fixed order and applies the Shabbat multiplier last.
///
/// Returns the itemised terms and the unrounded total.
pub(crate) fn apply_formula(
    inputs: &PricingInputs,
    config: &PricingConfig,
) -> (Vec<PriceComponent>, f64) {
    let mut components = Vec::with_capacity(6);
    let mut running = f64::from(config.base);
    components.push(PriceComponent {
        term: PriceTerm::Base,
        amount: running,
        notes: "base registration".to_string(),
    });

    if inputs.spouse_joining {
        running = add_term(
            &mut components,
            running,
            PriceTerm::Spouse,
            f64::from(config.spouse),
            "spouse joining".to_string(),
        );
    }

    running = add_term(
        &mut components,
        running,
        PriceTerm::Children,
        inputs.children as f64 * f64::from(config.per_child),
        format!("{} child(ren) at {}", inputs.children, config.per_child),
    );
    running = add_term(
        &mut components,
        running,
        PriceTerm::ChildrenOver18,
        inputs.children_over18 as f64 * f64::from(config.per_child_over18),
        format!(
            "{} child(ren) over 18 at {}",
            inputs.children_over18, config.per_child_over18
        ),
    );
    running = add_term(
        &mut components,
        running,
        PriceTerm::Transportation,
        inputs.transportation as f64 * f64::from(config.per_transport_seat),
        format!(
            "{} transport seat(s) at {}",
            inputs.transportation, config.per_transport_seat
        ),
    );
    running = add_term(
        &mut components,
        running,
        PriceTerm::Rooms,
        (inputs.rooms as f64 - 1.0) * f64::from(config.per_extra_room),
        format!("{} room(s), first included", inputs.rooms),
    );

    if inputs.shabbat_observance {
        let discounted = running * config.shabbat_multiplier;
        components.push(PriceComponent {
            term: PriceTerm::ShabbatDiscount,
            amount: discounted - running,
            notes: format!("Shabbat observance multiplier {}", config.shabbat_multiplier),
        });
        running = discounted;
    }

    (components, running)
}

fn add_term(
    components: &mut Vec<PriceComponent>,
    running: f64,
    term: PriceTerm,
    amount: f64,
    notes: String,
) -> f64 {
    components.push(PriceComponent {
        term,
        amount,
        notes,
    });
    running + amount
}

/// Round half up, once, at the very end of the formula.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
