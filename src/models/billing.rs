//! Billing service wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityId;

/// One billable line item on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl InvoiceLineItem {
    pub fn new(description: &str, unit_price: f64) -> Self {
        Self {
            description: description.to_string(),
            quantity: 1,
            unit_price,
        }
    }
}

/// Invoice creation body for `POST /api/billing/invoices`
///
/// The billing service requires a numeric `appointmentId` here, unlike every
/// other endpoint which accepts the id in whatever form it was issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub appointment_id: i64,
    pub patient_id: EntityId,
    pub items: Vec<InvoiceLineItem>,
    pub notes: String,
}

/// Invoice record as returned by the billing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
}

/// Verification request body for `POST /api/billing/insurance/verify`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceVerificationRequest {
    pub patient_id: EntityId,
    pub insurance_provider: String,
    pub policy_number: String,
    pub claimed_amount: f64,
    pub service_date: String,
    pub invoice_id: EntityId,
}

/// Verification result from `POST /api/billing/insurance/verify`
///
/// The claim submission forwards this result wholesale, so unrecognized
/// fields are retained via the flattened map rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceVerification {
    pub claimed_amount: f64,
    #[serde(default)]
    pub insurance_provider: String,
    #[serde(default)]
    pub policy_number: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Claim submission body for `POST /api/billing/insurance/claim`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub invoice_id: EntityId,
    pub claimed_amount: f64,
    pub insurance_provider: String,
    pub policy_number: String,
    pub insurance_info: InsuranceVerification,
}

/// Claim record as returned by the billing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: EntityId,
}

/// Payment request body for `POST /api/billing/payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub invoice_id: EntityId,
    pub amount: f64,
    pub payment_method: String,
    pub gateway: String,
}

/// Payment record as returned by the billing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: EntityId,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}
