//! # Medflow Client Library
//!
//! Client library for the healthcare appointment scheduling platform. Provides
//! one HTTP client per backing service (patient, doctor, appointment,
//! notification, billing, analytics) plus a workflow module that drives the
//! complete integration flow end to end: patient and doctor registration,
//! appointment lifecycle, notifications, billing with insurance verification
//! and payment, and analytics.
//!
//! The backing services own all business logic and state; this crate is a
//! pure client that threads identifiers from one call into the next.

pub mod api_clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod synthetic;
pub mod workflow;

// Re-export commonly used types for convenience
pub use api_clients::{
    AnalyticsServiceClient, AppointmentServiceClient, BillingServiceClient, DoctorServiceClient,
    NotificationServiceClient, PatientServiceClient,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use workflow::{Advisory, CompleteFlow, FlowContext, FlowReport};
