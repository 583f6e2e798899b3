//! # Complete Integration Flow
//!
//! Drives the whole scheduling workflow across the six backing services, in
//! order: patient registration and insurance, doctor registration and
//! availability, appointment booking and lifecycle, notification polling,
//! review, billing (invoice, insurance verification, claim, payment), and
//! analytics.
//!
//! Steps fall into two tiers, visible in the step signatures:
//!
//! - **fatal** steps return [`ClientResult`]; their failure aborts every
//!   remaining step and marks the run failed;
//! - **advisory** steps return [`Advisory`]; their failure is logged,
//!   recorded as a warning in the context, and the flow continues.
//!
//! Execution is strictly sequential. The fixed pauses between phases give
//! the services' event-driven side effects (notification delivery, invoice
//! pipelines, analytics projections) time to land; they are heuristics, and
//! the advisory tier absorbs the case where they are too short.

mod context;

pub use context::{AnalyticsSnapshot, BillingOutcome, FlowContext};

use std::time::Duration;
use tracing::{error, info, warn};

use crate::api_clients::billing_client::sample_line_items;
use crate::api_clients::{
    AnalyticsServiceClient, AppointmentServiceClient, BillingServiceClient, DoctorServiceClient,
    NotificationServiceClient, PatientServiceClient,
};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::models::billing::{InsuranceVerificationRequest, PaymentRequest};
use crate::models::doctor::{DoctorRegistration, DoctorReview};
use crate::models::notification::Notification;
use crate::models::patient::{InsuranceDetails, PatientRegistration};
use crate::models::EntityId;
use crate::synthetic::{random_email, random_policy_number};

/// Outcome of a best-effort step: either its value, or the reason it was
/// skipped. Unavailability never aborts the flow.
#[derive(Debug)]
pub enum Advisory<T> {
    Available(T),
    Unavailable { step: &'static str, reason: String },
}

impl<T> Advisory<T> {
    fn from_result(step: &'static str, result: ClientResult<T>) -> Self {
        match result {
            Ok(value) => Advisory::Available(value),
            Err(e) => {
                warn!(step, error = %e, "Advisory step failed, continuing");
                Advisory::Unavailable {
                    step,
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Advisory::Available(_))
    }

    /// Take the value, recording the skip reason as a warning otherwise
    fn record(self, warnings: &mut Vec<String>) -> Option<T> {
        match self {
            Advisory::Available(value) => Some(value),
            Advisory::Unavailable { step, reason } => {
                warnings.push(format!("{step}: {reason}"));
                None
            }
        }
    }
}

/// Final report of one flow run
#[derive(Debug)]
pub struct FlowReport {
    /// True when no fatal-tier step failed; advisory failures don't flip this
    pub success: bool,
    /// The fatal error, when `success` is false
    pub error: Option<String>,
    /// Everything the run accumulated before finishing or aborting
    pub context: FlowContext,
}

/// Orchestrates the complete scheduling workflow
pub struct CompleteFlow {
    config: ClientConfig,
    patient_service: PatientServiceClient,
    doctor_service: DoctorServiceClient,
    appointment_service: AppointmentServiceClient,
    notification_service: NotificationServiceClient,
    billing_service: BillingServiceClient,
    analytics_service: AnalyticsServiceClient,
}

impl CompleteFlow {
    /// Build clients for all six backing services from the configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            patient_service: PatientServiceClient::new(&config.services.patient)?,
            doctor_service: DoctorServiceClient::new(&config.services.doctor)?,
            appointment_service: AppointmentServiceClient::new(&config.services.appointment)?,
            notification_service: NotificationServiceClient::new(&config.services.notification)?,
            billing_service: BillingServiceClient::new(&config.services.billing)?,
            analytics_service: AnalyticsServiceClient::new(&config.services.analytics)?,
            config,
        })
    }

    /// Run the complete flow and report the outcome.
    ///
    /// A fatal-tier failure stops execution immediately and yields
    /// `success = false`; everything accumulated up to that point remains in
    /// the report's context.
    pub async fn run(&self) -> FlowReport {
        let mut ctx = FlowContext::default();

        match self.execute(&mut ctx).await {
            Ok(()) => {
                info!(
                    warnings = ctx.warnings.len(),
                    "Complete flow executed successfully"
                );
                FlowReport {
                    success: true,
                    error: None,
                    context: ctx,
                }
            }
            Err(e) => {
                error!(error = %e, "Integration flow failed; remaining steps skipped");
                FlowReport {
                    success: false,
                    error: Some(e.to_string()),
                    context: ctx,
                }
            }
        }
    }

    async fn execute(&self, ctx: &mut FlowContext) -> ClientResult<()> {
        let flow = &self.config.flow;

        // Step 1: patient registration plus insurance
        info!("STEP 1: patient registration");
        let registration = PatientRegistration {
            first_name: flow.patient.first_name.clone(),
            last_name: flow.patient.last_name.clone(),
            email: random_email(),
            phone_number: flow.patient.phone_number.clone(),
            date_of_birth: flow.patient.date_of_birth.clone(),
            gender: flow.patient.gender.clone(),
        };
        let patient = self.patient_service.register_patient(&registration).await?;
        let patient_id = patient.id.clone();
        ctx.patient_id = Some(patient_id.clone());
        ctx.patient_name = Some(patient.full_name());
        ctx.patient_email = Some(patient.email.clone());

        let policy_number = random_policy_number("POL");
        let provider_name = format!("{}{policy_number}", flow.insurance.provider_prefix);
        let insurance = InsuranceDetails {
            provider_name: provider_name.clone(),
            policy_number: policy_number.clone(),
            group_number: flow.insurance.group_number.clone(),
            policy_holder_name: flow.insurance.policy_holder_name.clone(),
            policy_holder_relationship: flow.insurance.policy_holder_relationship.clone(),
            coverage_start_date: flow.insurance.coverage_start_date.clone(),
            coverage_end_date: flow.insurance.coverage_end_date.clone(),
            copay_amount: flow.insurance.copay_amount,
            deductible_amount: flow.insurance.deductible_amount,
        };
        self.patient_service
            .update_insurance(&patient_id, &insurance)
            .await?;
        ctx.policy_number = Some(policy_number.clone());
        ctx.provider_name = Some(provider_name.clone());

        // Step 2: doctor registration plus weekly availability
        info!("STEP 2: doctor registration");
        let registration = DoctorRegistration {
            first_name: flow.doctor.first_name.clone(),
            last_name: flow.doctor.last_name.clone(),
            email: random_email(),
            phone_number: flow.doctor.phone_number.clone(),
            specialization: flow.doctor.specialization.clone(),
            years_of_experience: flow.doctor.years_of_experience,
            license_number: random_policy_number("MED"),
            consultation_fee: flow.doctor.consultation_fee,
            bio: flow.doctor.bio.clone(),
            qualifications: flow.doctor.qualifications.clone(),
        };
        let doctor = self.doctor_service.register_doctor(&registration).await?;
        let doctor_id = doctor.id.clone();
        ctx.doctor_id = Some(doctor_id.clone());
        ctx.doctor_name = Some(doctor.full_name());

        for slot in &flow.availability {
            self.doctor_service
                .update_availability(&doctor_id, slot)
                .await?;
        }
        info!(days = flow.availability.len(), "Availability set");

        // Step 3: appointment booking
        info!("STEP 3: appointment booking");
        ctx.available_slots = self
            .discover_slots(&doctor_id, &flow.appointment.slot_discovery_date)
            .await
            .record(&mut ctx.warnings)
            .map(|slots| slots.len());

        let appointment = self
            .appointment_service
            .schedule_appointment(
                &patient_id,
                &doctor_id,
                &flow.appointment.start_time,
                &flow.appointment.appointment_type,
                Some(&flow.appointment.notes),
                &flow.appointment.reason,
            )
            .await?;
        let appointment_id = appointment.id.clone();
        ctx.appointment_id = Some(appointment_id.clone());
        ctx.appointment_start = Some(appointment.start_time.clone());
        ctx.appointment_status = Some(appointment.status.clone());

        self.appointment_service
            .confirm_appointment(&appointment_id)
            .await?;

        // Step 4: notifications, delivered asynchronously by the platform
        info!("STEP 4: notification polling");
        self.settle(flow.delays.notification_settle_ms).await;
        ctx.notifications = self
            .poll_notifications(&patient_id)
            .await
            .record(&mut ctx.warnings);

        // Step 5: appointment completion and review
        info!("STEP 5: appointment completion");
        self.appointment_service
            .check_in_appointment(&appointment_id)
            .await?;
        self.appointment_service
            .complete_appointment(&appointment_id)
            .await?;

        let review = DoctorReview {
            patient_id: patient_id.clone(),
            rating: flow.review.rating,
            comment: flow.review.comment.clone(),
        };
        self.doctor_service.add_review(&doctor_id, &review).await?;

        // Step 6: billing, advisory as a whole block
        info!("STEP 6: billing and payment");
        self.settle(flow.delays.invoice_settle_ms).await;
        let billing = Advisory::from_result(
            "billing",
            self.run_billing(&appointment_id, &patient_id, &provider_name, &policy_number)
                .await,
        );
        ctx.billing = billing.record(&mut ctx.warnings);

        // Step 7: analytics, each query independently advisory
        info!("STEP 7: analytics");
        self.settle(flow.delays.analytics_settle_ms).await;
        let analytics = self.pull_analytics(&doctor_id).await;
        ctx.analytics.overview = analytics.0.record(&mut ctx.warnings);
        ctx.analytics.statistics = analytics.1.record(&mut ctx.warnings);
        ctx.analytics.revenue = analytics.2.record(&mut ctx.warnings);
        ctx.analytics.doctor_utilization = analytics.3.record(&mut ctx.warnings);

        Ok(())
    }

    /// Slot discovery before booking. Advisory: the booking proceeds with
    /// the configured start time regardless of what this returns.
    async fn discover_slots(
        &self,
        doctor_id: &EntityId,
        date: &str,
    ) -> Advisory<Vec<serde_json::Value>> {
        let result = self
            .appointment_service
            .get_available_slots(doctor_id, date)
            .await;

        if let Ok(slots) = &result {
            info!(count = slots.len(), date, "Available slots discovered");
        }
        Advisory::from_result("slot discovery", result)
    }

    /// Poll the patient's notifications. Advisory: delivery is event-driven
    /// and may not have happened yet.
    async fn poll_notifications(&self, patient_id: &EntityId) -> Advisory<Vec<Notification>> {
        let result = self
            .notification_service
            .get_patient_notifications(patient_id)
            .await;

        if let Ok(notifications) = &result {
            info!(count = notifications.len(), "Notifications sent to patient");
            for notification in notifications.iter().take(2) {
                info!(
                    subject = notification.subject.as_deref().unwrap_or("N/A"),
                    status = notification.status.as_deref().unwrap_or("N/A"),
                    "Notification"
                );
            }
        }
        Advisory::from_result("notification polling", result)
    }

    /// Invoice, verification, claim, payment: one advisory unit. Any error
    /// skips the rest of the block but not the flow.
    ///
    /// The payment amount is the verification's claimed amount, reproduced
    /// faithfully from the platform's demo flow; it is not reconciled
    /// against the invoice total.
    async fn run_billing(
        &self,
        appointment_id: &EntityId,
        patient_id: &EntityId,
        provider_name: &str,
        policy_number: &str,
    ) -> ClientResult<BillingOutcome> {
        let items = sample_line_items(&self.config.flow.billing.item_catalogue);
        let invoice = self
            .billing_service
            .create_appointment_invoice(appointment_id, patient_id, items)
            .await?;

        let verification = self
            .billing_service
            .verify_insurance(&InsuranceVerificationRequest {
                patient_id: patient_id.clone(),
                insurance_provider: provider_name.to_string(),
                policy_number: policy_number.to_string(),
                claimed_amount: invoice.total,
                service_date: self.config.flow.billing.service_date.clone(),
                invoice_id: invoice.id.clone(),
            })
            .await?;

        let claim = self
            .billing_service
            .submit_insurance_claim(&invoice.id, verification.clone())
            .await?;
        info!(claim_id = %claim.id, "Insurance claim submitted");

        let payment = self
            .billing_service
            .process_payment(&PaymentRequest {
                invoice_id: invoice.id.clone(),
                amount: verification.claimed_amount,
                payment_method: self.config.flow.billing.payment_method.clone(),
                gateway: self.config.flow.billing.gateway.clone(),
            })
            .await?;

        Ok(BillingOutcome {
            invoice,
            verification,
            claim,
            payment,
        })
    }

    /// The four analytics queries, each caught independently
    async fn pull_analytics(
        &self,
        doctor_id: &EntityId,
    ) -> (
        Advisory<crate::models::analytics::SystemOverview>,
        Advisory<crate::models::appointment::AppointmentStatistics>,
        Advisory<crate::models::analytics::RevenueAnalytics>,
        Advisory<crate::models::analytics::DoctorUtilization>,
    ) {
        let overview = Advisory::from_result(
            "system overview",
            self.analytics_service.get_system_overview().await,
        );
        let statistics = Advisory::from_result(
            "appointment statistics",
            self.appointment_service.get_statistics().await,
        );
        let revenue = Advisory::from_result(
            "revenue analytics",
            self.analytics_service.get_revenue_analytics(None, None).await,
        );
        let utilization = Advisory::from_result(
            "doctor utilization",
            self.analytics_service.get_doctor_utilization(doctor_id).await,
        );

        (overview, statistics, revenue, utilization)
    }

    async fn settle(&self, delay_ms: u64) {
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
