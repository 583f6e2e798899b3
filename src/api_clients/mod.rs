//! # Service API Clients
//!
//! One HTTP client per backing service. Each client is a thin stateless
//! binding: one method per endpoint, no retries, no shared state beyond the
//! configured base URL. The services are independently deployed bounded
//! contexts; nothing here assumes anything about their internals.

mod http;

pub mod analytics_client;
pub mod appointment_client;
pub mod billing_client;
pub mod doctor_client;
pub mod notification_client;
pub mod patient_client;

pub use analytics_client::AnalyticsServiceClient;
pub use appointment_client::AppointmentServiceClient;
pub use billing_client::BillingServiceClient;
pub use doctor_client::DoctorServiceClient;
pub use notification_client::NotificationServiceClient;
pub use patient_client::PatientServiceClient;
