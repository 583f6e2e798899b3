//! Appointment service wire types.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Scheduling request body for `POST /api/appointments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub notes: String,
    pub reason: String,
}

/// Appointment record as returned by the appointment service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: EntityId,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub status: String,
}

/// Aggregate counters from `GET /api/appointments/statistics`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStatistics {
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub completion_rate: f64,
}
