use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Room counts offered on the registration form.
pub const ROOM_OPTIONS: [i64; 5] = [1, 2, 3, 4, 5];

/// Loosely typed form value. Clients may send anything for a field; deciding whether it is
/// acceptable is the validator's job, not the JSON decoder's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

impl FieldValue {
    /// Whole-number view of the value. Decimals without a fractional part count as integers.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Decimal(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64 =>
            {
                Some(*value as i64)
            }
            _ => None,
        }
    }

    /// Count view of the value. Counts are bounded by `u32`; larger integers are rejected
    /// like any other invalid count.
    pub fn as_count(&self) -> Option<u32> {
        self.as_integer()
            .and_then(|value| u32::try_from(value).ok())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Reads a checkbox the way the form posts it: `null`, `false`, `0` and `""` are unchecked,
/// anything else is checked.
fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Raw registration as submitted by the form. `totalPrice` is never read from clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    #[serde(default)]
    pub employee: Option<FieldValue>,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub spouse_joining: bool,
    #[serde(default)]
    pub number_of_children: Option<FieldValue>,
    #[serde(default)]
    pub number_of_children_over18: Option<FieldValue>,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub shabbat_observance: bool,
    #[serde(default)]
    pub number_of_rooms: Option<FieldValue>,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub connecting_door_needed: bool,
    #[serde(default)]
    pub transportation_needed: Option<FieldValue>,
    #[serde(default, deserialize_with = "truthy_flag")]
    pub basketball_tournament_notification: bool,
    #[serde(default)]
    pub number_of_people_arriving: Option<FieldValue>,
}

impl RegistrationSubmission {
    pub fn employee_name(&self) -> Option<&str> {
        self.employee.as_ref().and_then(FieldValue::as_text)
    }

    pub fn children(&self) -> Option<u32> {
        count_of(&self.number_of_children)
    }

    pub fn children_over18(&self) -> Option<u32> {
        count_of(&self.number_of_children_over18)
    }

    pub fn people_arriving(&self) -> Option<u32> {
        count_of(&self.number_of_people_arriving)
    }

    pub fn transportation(&self) -> Option<u32> {
        count_of(&self.transportation_needed)
    }

    /// Party size implied by the household: the employee, an optional spouse, and the children.
    pub fn expected_people_arriving(&self) -> Option<u32> {
        let adults = if self.spouse_joining { 2 } else { 1 };
        self.children()
            .and_then(|children| children.checked_add(adults))
    }
}

fn count_of(field: &Option<FieldValue>) -> Option<u32> {
    field.as_ref().and_then(FieldValue::as_count)
}

/// An accepted, priced registration. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub employee: String,
    pub spouse_joining: bool,
    pub number_of_children: u32,
    pub number_of_children_over18: u32,
    pub shabbat_observance: bool,
    pub number_of_rooms: i64,
    pub connecting_door_needed: bool,
    pub transportation_needed: u32,
    pub basketball_tournament_notification: bool,
    pub number_of_people_arriving: u32,
    pub total_price: u32,
}

/// Row identifier assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegistrationId(pub i64);

/// Persisted registration row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: RegistrationId,
    pub registration: Registration,
    pub created_at: DateTime<Utc>,
}
