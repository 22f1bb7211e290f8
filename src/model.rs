use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilitySlot {
    pub price: f64,
    pub start_hole: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub results: Vec<AvailabilitySlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeeTimeRecord {
    pub date: String,
    pub time: String,
    pub course: String,
    pub price: f64,
    pub players: u32,
    pub start_hole: u32,
}
