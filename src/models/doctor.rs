//! Doctor service wire types.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Registration request body for `POST /api/doctors/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub specialization: String,
    pub years_of_experience: u32,
    pub license_number: String,
    pub consultation_fee: f64,
    pub bio: String,
    pub qualifications: String,
}

/// Doctor record as returned by the doctor service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub specialization: String,
}

impl DoctorRecord {
    /// Display name with honorific, e.g. "Dr. John Smith"
    pub fn full_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}

/// One weekday entry for `POST /api/doctors/{id}/availability`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilitySlot {
    pub fn new(day_of_week: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day_of_week: day_of_week.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// Review request body for `POST /api/doctors/{id}/reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorReview {
    pub patient_id: EntityId,
    pub rating: f64,
    pub comment: String,
}
