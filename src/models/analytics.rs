//! Analytics service wire types.

use serde::{Deserialize, Serialize};

/// Platform-wide summary from `GET /api/analytics/system/overview`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOverview {
    #[serde(default)]
    pub system_status: Option<String>,
    #[serde(default)]
    pub total_events_tracked: u64,
}

/// Revenue summary from `GET /api/analytics/revenue`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalytics {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_transactions: u64,
}

/// Per-doctor metrics from `GET /api/analytics/doctor/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorUtilization {
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub average_rating: f64,
}
