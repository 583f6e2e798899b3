//! Patient service wire types.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// Registration request body for `POST /api/patients/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
}

/// Insurance details for `PUT /api/patients/{id}/insurance`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceDetails {
    pub provider_name: String,
    pub policy_number: String,
    pub group_number: String,
    pub policy_holder_name: String,
    pub policy_holder_relationship: String,
    pub coverage_start_date: String,
    pub coverage_end_date: String,
    pub copay_amount: f64,
    pub deductible_amount: f64,
}

/// Patient record as returned by the patient service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

impl PatientRecord {
    /// Full display name, e.g. "Bob Williams"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
