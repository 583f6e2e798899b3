//! Identifier threading for the integration flow.
//!
//! Everything the flow learns from earlier calls and feeds into later ones
//! lives in one record, accumulated step by step. Fields stay `None` until
//! their producing step has run, so a failed run's report shows exactly how
//! far the flow got.

use crate::models::analytics::{DoctorUtilization, RevenueAnalytics, SystemOverview};
use crate::models::appointment::AppointmentStatistics;
use crate::models::billing::{ClaimRecord, InsuranceVerification, Invoice, PaymentRecord};
use crate::models::notification::Notification;
use crate::models::EntityId;

/// Accumulated state of one flow run
#[derive(Debug, Default)]
pub struct FlowContext {
    pub patient_id: Option<EntityId>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub policy_number: Option<String>,
    pub provider_name: Option<String>,
    pub doctor_id: Option<EntityId>,
    pub doctor_name: Option<String>,
    pub appointment_id: Option<EntityId>,
    pub appointment_start: Option<String>,
    pub appointment_status: Option<String>,
    /// Number of free slots discovered before booking (advisory)
    pub available_slots: Option<usize>,
    /// Notifications observed for the patient (advisory)
    pub notifications: Option<Vec<Notification>>,
    /// Result of the billing block, if it ran to completion (advisory)
    pub billing: Option<BillingOutcome>,
    pub analytics: AnalyticsSnapshot,
    /// Advisory-tier failures, in the order they occurred
    pub warnings: Vec<String>,
}

/// Everything the billing block produces
#[derive(Debug, Clone)]
pub struct BillingOutcome {
    pub invoice: Invoice,
    pub verification: InsuranceVerification,
    pub claim: ClaimRecord,
    pub payment: PaymentRecord,
}

/// Analytics results, each independently advisory
#[derive(Debug, Default)]
pub struct AnalyticsSnapshot {
    pub overview: Option<SystemOverview>,
    pub statistics: Option<AppointmentStatistics>,
    pub revenue: Option<RevenueAnalytics>,
    pub doctor_utilization: Option<DoctorUtilization>,
}
