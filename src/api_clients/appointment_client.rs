//! # Appointment Service Client
//!
//! HTTP client for the appointment service: scheduling, the lifecycle
//! transitions (confirm, check-in, complete), slot discovery, and aggregate
//! statistics. The appointment state machine lives entirely in the service;
//! this client only invokes the transitions in order and trusts the service
//! to reject anything invalid.

use chrono::{Duration as ChronoDuration, NaiveDateTime};
use serde_json::Value;
use tracing::info;

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::appointment::{AppointmentRecord, AppointmentRequest, AppointmentStatistics};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/appointments";

const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Compute the appointment window from a start-time string.
///
/// The start is parsed as ISO-8601 first, falling back to the explicit
/// `%Y-%m-%dT%H:%M:%S` format only if that fails; the end is one hour later.
/// Both are returned in the wire format the service expects.
pub fn appointment_window(start_time: &str) -> ClientResult<(String, String)> {
    let start: NaiveDateTime = start_time
        .parse()
        .or_else(|_| NaiveDateTime::parse_from_str(start_time, WIRE_TIME_FORMAT))
        .map_err(|e| ClientError::InvalidInput(format!("Unparseable start time: {e}")))?;

    let end = start + ChronoDuration::hours(1);
    Ok((
        start.format(WIRE_TIME_FORMAT).to_string(),
        end.format(WIRE_TIME_FORMAT).to_string(),
    ))
}

/// Client for the appointment service
#[derive(Clone)]
pub struct AppointmentServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for AppointmentServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppointmentServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl AppointmentServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("appointment", config)?,
        })
    }

    /// Schedule a new appointment for a one-hour window starting at
    /// `start_time`
    ///
    /// POST /api/appointments
    pub async fn schedule_appointment(
        &self,
        patient_id: &EntityId,
        doctor_id: &EntityId,
        start_time: &str,
        appointment_type: &str,
        notes: Option<&str>,
        reason: &str,
    ) -> ClientResult<AppointmentRecord> {
        let (start_time, end_time) = appointment_window(start_time)?;

        let request = AppointmentRequest {
            patient_id: patient_id.clone(),
            doctor_id: doctor_id.clone(),
            start_time,
            end_time,
            appointment_type: appointment_type.to_string(),
            notes: notes.unwrap_or_default().to_string(),
            reason: reason.to_string(),
        };

        let appointment: AppointmentRecord = self.http.post_json(API_PREFIX, &request).await?;

        info!(
            appointment_id = %appointment.id,
            start_time = %appointment.start_time,
            status = %appointment.status,
            "Scheduled appointment"
        );
        Ok(appointment)
    }

    /// Get appointment details
    ///
    /// GET /api/appointments/{id}
    pub async fn get_appointment(
        &self,
        appointment_id: &EntityId,
    ) -> ClientResult<AppointmentRecord> {
        self.http
            .get_json(&format!("{API_PREFIX}/{appointment_id}"))
            .await
    }

    /// Confirm a scheduled appointment
    ///
    /// POST /api/appointments/{id}/confirm
    pub async fn confirm_appointment(&self, appointment_id: &EntityId) -> ClientResult<Value> {
        self.transition(appointment_id, "confirm").await
    }

    /// Check the patient in for a confirmed appointment
    ///
    /// POST /api/appointments/{id}/check-in
    pub async fn check_in_appointment(&self, appointment_id: &EntityId) -> ClientResult<Value> {
        self.transition(appointment_id, "check-in").await
    }

    /// Mark a checked-in appointment as completed
    ///
    /// POST /api/appointments/{id}/complete
    pub async fn complete_appointment(&self, appointment_id: &EntityId) -> ClientResult<Value> {
        self.transition(appointment_id, "complete").await
    }

    async fn transition(&self, appointment_id: &EntityId, action: &str) -> ClientResult<Value> {
        let result = self
            .http
            .post_empty(&format!("{API_PREFIX}/{appointment_id}/{action}"))
            .await?;

        info!(appointment_id = %appointment_id, action, "Appointment transition applied");
        Ok(result)
    }

    /// Find free appointment slots for a doctor on a given date
    ///
    /// GET /api/appointments/available-slots?doctorId=&date=
    pub async fn get_available_slots(
        &self,
        doctor_id: &EntityId,
        date: &str,
    ) -> ClientResult<Vec<Value>> {
        self.http
            .get_json_query(
                &format!("{API_PREFIX}/available-slots"),
                &[("doctorId", doctor_id.to_string().as_str()), ("date", date)],
            )
            .await
    }

    /// Get aggregate appointment statistics
    ///
    /// GET /api/appointments/statistics
    pub async fn get_statistics(&self) -> ClientResult<AppointmentStatistics> {
        self.http.get_json(&format!("{API_PREFIX}/statistics")).await
    }
}
