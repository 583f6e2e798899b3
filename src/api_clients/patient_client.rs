//! # Patient Service Client
//!
//! HTTP client for the patient service (registration, lookup, insurance).

use serde_json::Value;
use tracing::info;

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::ClientResult;
use crate::models::patient::{InsuranceDetails, PatientRecord, PatientRegistration};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/patients";

/// Client for the patient service
#[derive(Clone)]
pub struct PatientServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for PatientServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatientServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl PatientServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("patient", config)?,
        })
    }

    /// Register a new patient
    ///
    /// POST /api/patients/register
    pub async fn register_patient(
        &self,
        registration: &PatientRegistration,
    ) -> ClientResult<PatientRecord> {
        let patient: PatientRecord = self
            .http
            .post_json(&format!("{API_PREFIX}/register"), registration)
            .await?;

        info!(
            patient_id = %patient.id,
            email = %patient.email,
            "Registered patient"
        );
        Ok(patient)
    }

    /// Get patient details
    ///
    /// GET /api/patients/{id}
    pub async fn get_patient(&self, patient_id: &EntityId) -> ClientResult<PatientRecord> {
        self.http
            .get_json(&format!("{API_PREFIX}/{patient_id}"))
            .await
    }

    /// Update a patient's insurance details
    ///
    /// PUT /api/patients/{id}/insurance
    pub async fn update_insurance(
        &self,
        patient_id: &EntityId,
        insurance: &InsuranceDetails,
    ) -> ClientResult<Value> {
        let updated = self
            .http
            .put_json(&format!("{API_PREFIX}/{patient_id}/insurance"), insurance)
            .await?;

        info!(
            patient_id = %patient_id,
            provider = %insurance.provider_name,
            "Updated patient insurance"
        );
        Ok(updated)
    }
}
