//! # Client Configuration
//!
//! Configuration for service endpoints and the demo flow data. Values come
//! from, in increasing precedence: built-in defaults, an optional TOML file
//! (`./medflow-client.toml` or `~/.medflow/config.toml`), and `MEDFLOW_*`
//! environment variables.
//!
//! The fixed demographic payloads, availability schedule, and billable item
//! catalogue used by the integration flow live here as defaults rather than
//! as inline literals, so a run can be reproduced or varied without touching
//! code.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::models::billing::InvoiceLineItem;
use crate::models::doctor::AvailabilitySlot;

/// Client configuration for all six backing services plus flow defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Per-service endpoint settings
    pub services: ServiceEndpoints,
    /// Demo data and pacing for the complete flow
    pub flow: FlowConfig,
}

/// Base URLs and timeouts for the six backing services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEndpoints {
    pub patient: ApiEndpointConfig,
    pub doctor: ApiEndpointConfig,
    pub appointment: ApiEndpointConfig,
    pub notification: ApiEndpointConfig,
    pub billing: ApiEndpointConfig,
    pub analytics: ApiEndpointConfig,
}

/// Configuration for connecting to a single backing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpointConfig {
    /// Base URL for the service (e.g. "http://localhost:8081")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl ApiEndpointConfig {
    fn at_port(port: u16) -> Self {
        Self {
            base_url: format!("http://localhost:{port}"),
            timeout_ms: 30_000,
        }
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            patient: ApiEndpointConfig::at_port(8081),
            doctor: ApiEndpointConfig::at_port(8082),
            appointment: ApiEndpointConfig::at_port(8083),
            notification: ApiEndpointConfig::at_port(8084),
            billing: ApiEndpointConfig::at_port(8085),
            analytics: ApiEndpointConfig::at_port(8086),
        }
    }
}

/// Demo payloads and pacing for the complete integration flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub patient: PatientDefaults,
    pub insurance: InsuranceDefaults,
    pub doctor: DoctorDefaults,
    /// Weekly availability schedule, one update call per entry
    pub availability: Vec<AvailabilitySlot>,
    pub appointment: AppointmentDefaults,
    pub review: ReviewDefaults,
    pub billing: BillingDefaults,
    pub delays: SettleDelays,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            patient: PatientDefaults::default(),
            insurance: InsuranceDefaults::default(),
            doctor: DoctorDefaults::default(),
            availability: vec![
                AvailabilitySlot::new("Monday", "09:00", "17:00"),
                AvailabilitySlot::new("Tuesday", "09:00", "17:00"),
                AvailabilitySlot::new("Wednesday", "09:00", "17:00"),
                AvailabilitySlot::new("Thursday", "09:00", "17:00"),
                AvailabilitySlot::new("Friday", "09:00", "13:00"),
            ],
            appointment: AppointmentDefaults::default(),
            review: ReviewDefaults::default(),
            billing: BillingDefaults::default(),
            delays: SettleDelays::default(),
        }
    }
}

/// Fixed demographics for the demo patient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientDefaults {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
}

impl Default for PatientDefaults {
    fn default() -> Self {
        Self {
            first_name: "Bob".to_string(),
            last_name: "Williams".to_string(),
            phone_number: "+420333444555".to_string(),
            date_of_birth: "1992-07-08".to_string(),
            gender: "MALE".to_string(),
        }
    }
}

/// Fixed insurance payload; the provider name is suffixed with the generated
/// policy number at run time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsuranceDefaults {
    pub provider_prefix: String,
    pub group_number: String,
    pub policy_holder_name: String,
    pub policy_holder_relationship: String,
    pub coverage_start_date: String,
    pub coverage_end_date: String,
    pub copay_amount: f64,
    pub deductible_amount: f64,
}

impl Default for InsuranceDefaults {
    fn default() -> Self {
        Self {
            provider_prefix: "AXA Insurance ".to_string(),
            group_number: "GRP-YOUTH-300".to_string(),
            policy_holder_name: "Parent Name".to_string(),
            policy_holder_relationship: "PARENT".to_string(),
            coverage_start_date: "2023-01-01".to_string(),
            coverage_end_date: "2026-12-31".to_string(),
            copay_amount: 10.00,
            deductible_amount: 250.00,
        }
    }
}

/// Fixed demographics and credentials for the demo doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorDefaults {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub specialization: String,
    pub years_of_experience: u32,
    pub consultation_fee: f64,
    pub bio: String,
    pub qualifications: String,
}

impl Default for DoctorDefaults {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            phone_number: "+420111222333".to_string(),
            specialization: "Cardiology".to_string(),
            years_of_experience: 15,
            consultation_fee: 100.0,
            bio: "Experienced cardiologist".to_string(),
            qualifications: "MD, FACC".to_string(),
        }
    }
}

/// Fixed booking parameters for the demo appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentDefaults {
    /// Date queried for available slots before booking
    pub slot_discovery_date: String,
    pub start_time: String,
    pub appointment_type: String,
    pub notes: String,
    /// Visit reason as recorded upstream (the platform's literal, typo included)
    pub reason: String,
}

impl Default for AppointmentDefaults {
    fn default() -> Self {
        Self {
            slot_discovery_date: "2025-12-15".to_string(),
            start_time: "2025-12-15T10:00:00".to_string(),
            appointment_type: "CONSULTATION".to_string(),
            notes: "Annual heart checkup".to_string(),
            reason: "Anual CheckUp".to_string(),
        }
    }
}

/// Fixed post-visit review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewDefaults {
    pub rating: f64,
    pub comment: String,
}

impl Default for ReviewDefaults {
    fn default() -> Self {
        Self {
            rating: 5.0,
            comment: "Excellent doctor, very thorough examination!".to_string(),
        }
    }
}

/// Billing parameters: the billable item catalogue the client samples from,
/// and fixed payment/insurance fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDefaults {
    pub item_catalogue: Vec<InvoiceLineItem>,
    pub service_date: String,
    pub payment_method: String,
    pub gateway: String,
}

impl Default for BillingDefaults {
    fn default() -> Self {
        Self {
            item_catalogue: vec![
                InvoiceLineItem::new("Initial Consultation", 150.00),
                InvoiceLineItem::new("Follow-up Visit", 100.00),
                InvoiceLineItem::new("Blood Test - Complete Blood Count", 45.00),
                InvoiceLineItem::new("Blood Test - Lipid Panel", 55.00),
                InvoiceLineItem::new("X-Ray - Chest", 200.00),
                InvoiceLineItem::new("X-Ray - Dental", 85.00),
                InvoiceLineItem::new("ECG/EKG Test", 120.00),
                InvoiceLineItem::new("Ultrasound Scan", 250.00),
                InvoiceLineItem::new("MRI Scan", 800.00),
                InvoiceLineItem::new("CT Scan", 600.00),
                InvoiceLineItem::new("Physical Examination", 75.00),
                InvoiceLineItem::new("Vaccination - Flu Shot", 35.00),
                InvoiceLineItem::new("Vaccination - COVID-19", 40.00),
                InvoiceLineItem::new("Prescription Medication", 65.00),
                InvoiceLineItem::new("Diabetes Screening", 80.00),
                InvoiceLineItem::new("Thyroid Function Test", 95.00),
                InvoiceLineItem::new("Urinalysis", 30.00),
                InvoiceLineItem::new("Vision Test", 50.00),
                InvoiceLineItem::new("Hearing Test", 60.00),
                InvoiceLineItem::new("Allergy Testing", 180.00),
            ],
            service_date: "2025-12-10".to_string(),
            payment_method: "CREDIT_CARD".to_string(),
            gateway: "Stripe".to_string(),
        }
    }
}

/// Pauses before polling results of the backing services' async processing.
/// These are heuristic waits for Kafka-driven side effects, not guarantees;
/// the advisory error tier covers the case where they are too short.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleDelays {
    pub notification_settle_ms: u64,
    pub invoice_settle_ms: u64,
    pub analytics_settle_ms: u64,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            notification_settle_ms: 1_000,
            invoice_settle_ms: 2_000,
            analytics_settle_ms: 1_000,
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults, config file, and environment
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`MEDFLOW_*`)
    /// 2. Config file (`./medflow-client.toml`, `~/.medflow/config.toml`)
    /// 3. Default values
    pub fn load() -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    debug!("Failed to load config file: {}", e);
                    // Continue with defaults if the config file is unreadable
                }
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config_error(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ClientError::config_error(format!("Failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut candidates: Vec<PathBuf> = vec![
            PathBuf::from("./medflow-client.toml"),
            PathBuf::from("./config/medflow-client.toml"),
        ];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".medflow").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("medflow").join("client.toml"));
        }

        candidates.into_iter().find(|p| p.is_file())
    }

    /// Apply environment variable overrides for service endpoints
    fn apply_env_overrides(&mut self) {
        let overrides: [(&str, &mut ApiEndpointConfig); 6] = [
            ("PATIENT", &mut self.services.patient),
            ("DOCTOR", &mut self.services.doctor),
            ("APPOINTMENT", &mut self.services.appointment),
            ("NOTIFICATION", &mut self.services.notification),
            ("BILLING", &mut self.services.billing),
            ("ANALYTICS", &mut self.services.analytics),
        ];

        for (name, endpoint) in overrides {
            if let Ok(url) = std::env::var(format!("MEDFLOW_{name}_URL")) {
                endpoint.base_url = url;
            }
            if let Ok(timeout) = std::env::var(format!("MEDFLOW_{name}_TIMEOUT_MS")) {
                if let Ok(timeout_ms) = timeout.parse() {
                    endpoint.timeout_ms = timeout_ms;
                }
            }
        }
    }
}
