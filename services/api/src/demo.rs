use crate::infra::{demo_roster, InMemoryRegistrationStore};
use clap::Args;
use event_housing::error::AppError;
use event_housing::registration::{
    FieldValue, PricingEngine, RegistrationService, RegistrationServiceError,
    RegistrationSubmission, StaticRoster,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// The employee's spouse is joining
    #[arg(long)]
    pub(crate) spouse: bool,
    /// Number of children arriving
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u32,
    /// How many of those children are over 18
    #[arg(long, default_value_t = 0)]
    pub(crate) over18: u32,
    /// Number of rooms (1-5 on the form)
    #[arg(long, default_value_t = 1)]
    pub(crate) rooms: i64,
    /// Transportation seats needed
    #[arg(long, default_value_t = 0)]
    pub(crate) transportation: u32,
    /// Apply the Shabbat observance rate
    #[arg(long)]
    pub(crate) shabbat: bool,
}

impl QuoteArgs {
    fn submission(&self) -> RegistrationSubmission {
        let adults = if self.spouse { 2 } else { 1 };
        RegistrationSubmission {
            employee: None,
            spouse_joining: self.spouse,
            number_of_children: Some(FieldValue::Integer(i64::from(self.children))),
            number_of_children_over18: Some(FieldValue::Integer(i64::from(self.over18))),
            shabbat_observance: self.shabbat,
            number_of_rooms: Some(FieldValue::Integer(self.rooms)),
            connecting_door_needed: false,
            transportation_needed: Some(FieldValue::Integer(i64::from(self.transportation))),
            basketball_tournament_notification: false,
            number_of_people_arriving: Some(FieldValue::Integer(
                i64::from(self.children) + adults,
            )),
        }
    }
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let quote = PricingEngine::default()
        .quote(&args.submission())
        .map_err(RegistrationServiceError::from)?;

    println!("Registration quote");
    for component in &quote.components {
        println!("- {:>9.2}  {}", component.amount, component.notes);
    }
    println!("Total price: {} shekels", quote.total_price);
    Ok(())
}

struct DemoCase {
    label: &'static str,
    submission: RegistrationSubmission,
}

fn demo_cases() -> Vec<DemoCase> {
    let family = RegistrationSubmission {
        employee: Some(FieldValue::from("Alice")),
        spouse_joining: true,
        number_of_children: Some(FieldValue::Integer(2)),
        number_of_children_over18: Some(FieldValue::Integer(0)),
        shabbat_observance: false,
        number_of_rooms: Some(FieldValue::Integer(1)),
        connecting_door_needed: true,
        transportation_needed: Some(FieldValue::Integer(0)),
        basketball_tournament_notification: false,
        number_of_people_arriving: Some(FieldValue::Integer(4)),
    };

    let mut observant = family.clone();
    observant.employee = Some(FieldValue::from("Yossi Mizrahi"));
    observant.shabbat_observance = true;

    let mut miscounted = family.clone();
    miscounted.number_of_people_arriving = Some(FieldValue::Integer(5));

    let mut unknown = family.clone();
    unknown.employee = Some(FieldValue::from("Mallory"));

    let mut no_rooms = family.clone();
    no_rooms.employee = Some(FieldValue::from("Bob Levi"));
    no_rooms.number_of_rooms = None;

    vec![
        DemoCase {
            label: "family of four",
            submission: family,
        },
        DemoCase {
            label: "Shabbat observant family",
            submission: observant,
        },
        DemoCase {
            label: "party size mismatch",
            submission: miscounted,
        },
        DemoCase {
            label: "employee not on roster",
            submission: unknown,
        },
        DemoCase {
            label: "room count left blank",
            submission: no_rooms,
        },
    ]
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let store = Arc::new(InMemoryRegistrationStore::default());
    let service =
        RegistrationService::new(Arc::new(StaticRoster::new(demo_roster())), store.clone());

    println!("Registration demo");
    for case in demo_cases() {
        match service.submit(case.submission) {
            Ok(record) => println!(
                "- {}: stored #{} for {} at {} shekels",
                case.label,
                record.id.0,
                record.registration.employee,
                record.registration.total_price
            ),
            Err(RegistrationServiceError::Validation(reason)) => {
                println!("- {}: rejected ({reason})", case.label)
            }
            Err(RegistrationServiceError::Pricing(reason)) => {
                println!("- {}: not stored ({reason})", case.label)
            }
            Err(other) => return Err(other.into()),
        }
    }

    println!("\nStored registrations: {}", store.rows().len());
    Ok(())
}
