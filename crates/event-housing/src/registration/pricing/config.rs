use serde::{Deserialize, Serialize};

/// Rate card for the registration price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub base: u32,
    pub spouse: u32,
    pub per_child: u32,
    pub per_child_over18: u32,
    pub per_transport_seat: u32,
    pub per_extra_room: u32,
    pub shabbat_multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base: 520,
            spouse: 120,
            per_child: 60,
            per_child_over18: 250,
            per_transport_seat: 25,
            per_extra_room: 500,
            shabbat_multiplier: 0.82,
        }
    }
}
