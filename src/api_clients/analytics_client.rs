//! # Analytics Service Client
//!
//! HTTP client for the analytics service. Analytics consume the platform's
//! event stream, so freshly triggered events may not be reflected yet;
//! callers treat every query here as advisory.

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::ClientResult;
use crate::models::analytics::{DoctorUtilization, RevenueAnalytics, SystemOverview};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/analytics";

/// Client for the analytics service
#[derive(Clone)]
pub struct AnalyticsServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for AnalyticsServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl AnalyticsServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("analytics", config)?,
        })
    }

    /// Get the platform-wide health and event summary
    ///
    /// GET /api/analytics/system/overview
    pub async fn get_system_overview(&self) -> ClientResult<SystemOverview> {
        self.http
            .get_json(&format!("{API_PREFIX}/system/overview"))
            .await
    }

    /// Get revenue analytics, optionally bounded by a date range
    ///
    /// GET /api/analytics/revenue?startDate=&endDate=
    pub async fn get_revenue_analytics(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ClientResult<RevenueAnalytics> {
        let mut query = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end));
        }

        self.http
            .get_json_query(&format!("{API_PREFIX}/revenue"), &query)
            .await
    }

    /// Get utilization metrics for one doctor
    ///
    /// GET /api/analytics/doctor/{id}
    pub async fn get_doctor_utilization(
        &self,
        doctor_id: &EntityId,
    ) -> ClientResult<DoctorUtilization> {
        self.http
            .get_json(&format!("{API_PREFIX}/doctor/{doctor_id}"))
            .await
    }
}
