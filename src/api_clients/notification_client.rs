//! # Notification Service Client
//!
//! HTTP client for the notification service. Notifications are produced
//! asynchronously by the platform's event bus, so reads here may observe
//! nothing yet; callers treat the results as advisory.

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::ClientResult;
use crate::models::notification::{DeliveryStatus, Notification};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/notifications";

/// Client for the notification service
#[derive(Clone)]
pub struct NotificationServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for NotificationServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl NotificationServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("notification", config)?,
        })
    }

    /// List notifications sent to a patient
    ///
    /// GET /api/notifications/patient/{patientId}
    pub async fn get_patient_notifications(
        &self,
        patient_id: &EntityId,
    ) -> ClientResult<Vec<Notification>> {
        self.http
            .get_json(&format!("{API_PREFIX}/patient/{patient_id}"))
            .await
    }

    /// Get delivery statistics across all notifications
    ///
    /// GET /api/notifications/delivery-status
    pub async fn get_delivery_status(&self) -> ClientResult<DeliveryStatus> {
        self.http
            .get_json(&format!("{API_PREFIX}/delivery-status"))
            .await
    }
}
