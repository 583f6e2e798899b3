//! # Doctor Service Client
//!
//! HTTP client for the doctor service (registration, lookup, availability,
//! reviews).

use serde_json::Value;
use tracing::info;

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::ClientResult;
use crate::models::doctor::{AvailabilitySlot, DoctorRecord, DoctorRegistration, DoctorReview};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/doctors";

/// Client for the doctor service
#[derive(Clone)]
pub struct DoctorServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for DoctorServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoctorServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl DoctorServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("doctor", config)?,
        })
    }

    /// Register a new doctor
    ///
    /// POST /api/doctors/register
    pub async fn register_doctor(
        &self,
        registration: &DoctorRegistration,
    ) -> ClientResult<DoctorRecord> {
        let doctor: DoctorRecord = self
            .http
            .post_json(&format!("{API_PREFIX}/register"), registration)
            .await?;

        info!(
            doctor_id = %doctor.id,
            specialization = %doctor.specialization,
            "Registered doctor"
        );
        Ok(doctor)
    }

    /// Get a doctor's profile
    ///
    /// GET /api/doctors/{id}
    pub async fn get_doctor(&self, doctor_id: &EntityId) -> ClientResult<DoctorRecord> {
        self.http
            .get_json(&format!("{API_PREFIX}/{doctor_id}"))
            .await
    }

    /// Add one weekday entry to a doctor's availability
    ///
    /// POST /api/doctors/{id}/availability
    pub async fn update_availability(
        &self,
        doctor_id: &EntityId,
        slot: &AvailabilitySlot,
    ) -> ClientResult<Value> {
        self.http
            .post_json(&format!("{API_PREFIX}/{doctor_id}/availability"), slot)
            .await
    }

    /// Add a patient review for a doctor
    ///
    /// POST /api/doctors/{id}/reviews
    pub async fn add_review(
        &self,
        doctor_id: &EntityId,
        review: &DoctorReview,
    ) -> ClientResult<Value> {
        let created = self
            .http
            .post_json(&format!("{API_PREFIX}/{doctor_id}/reviews"), review)
            .await?;

        info!(
            doctor_id = %doctor_id,
            rating = review.rating,
            "Added doctor review"
        );
        Ok(created)
    }
}
