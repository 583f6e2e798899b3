//! # Billing Service Client
//!
//! HTTP client for the billing service: invoices, insurance verification and
//! claims, payments, and revenue reports.
//!
//! Invoice creation is the one place this client does business-like work:
//! the set of billed line items is sampled client-side from the configured
//! catalogue rather than computed by the billing service. That is a known
//! shortcut of the demo flow, kept as-is.
//!
//! Claim submission and payment decode whatever body comes back without
//! insisting on a 2xx status; the flow treats those two results as
//! informational.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::info;

use super::http::ServiceHttp;
use crate::config::ApiEndpointConfig;
use crate::error::ClientResult;
use crate::models::billing::{
    ClaimRecord, ClaimRequest, InsuranceVerification, InsuranceVerificationRequest, Invoice,
    InvoiceLineItem, InvoiceRequest, PaymentRecord, PaymentRequest,
};
use crate::models::EntityId;

const API_PREFIX: &str = "/api/billing";

/// Explicit timeout for invoice creation; the billing service may be waiting
/// on its own async pipeline when this is called.
const INVOICE_TIMEOUT: Duration = Duration::from_secs(10);

/// How many line items an invoice carries, inclusive bounds
const ITEMS_PER_INVOICE: std::ops::RangeInclusive<usize> = 2..=4;

/// Sample a random invoice: between 2 and 4 distinct items from the
/// catalogue, each with quantity 1.
pub fn sample_line_items(catalogue: &[InvoiceLineItem]) -> Vec<InvoiceLineItem> {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(ITEMS_PER_INVOICE);
    catalogue
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Client for the billing service
#[derive(Clone)]
pub struct BillingServiceClient {
    http: ServiceHttp,
}

impl std::fmt::Debug for BillingServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingServiceClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

impl BillingServiceClient {
    pub fn new(config: &ApiEndpointConfig) -> ClientResult<Self> {
        Ok(Self {
            http: ServiceHttp::new("billing", config)?,
        })
    }

    /// Get the invoice generated for an appointment
    ///
    /// GET /api/billing/invoices/appointment/{appointmentId}
    pub async fn get_invoice_by_appointment(
        &self,
        appointment_id: &EntityId,
    ) -> ClientResult<Invoice> {
        self.http
            .get_json(&format!("{API_PREFIX}/invoices/appointment/{appointment_id}"))
            .await
    }

    /// Create an invoice for an appointment with client-selected line items
    ///
    /// POST /api/billing/invoices
    ///
    /// The billing service requires a numeric appointment id here; string
    /// ids that don't parse as integers are rejected before the request is
    /// sent.
    pub async fn create_appointment_invoice(
        &self,
        appointment_id: &EntityId,
        patient_id: &EntityId,
        items: Vec<InvoiceLineItem>,
    ) -> ClientResult<Invoice> {
        let request = InvoiceRequest {
            appointment_id: appointment_id.as_i64()?,
            patient_id: patient_id.clone(),
            items,
            notes: format!(
                "Generated invoice for appointment #{appointment_id} on {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M")
            ),
        };

        let invoice: Invoice = self
            .http
            .post_json_lenient(
                &format!("{API_PREFIX}/invoices"),
                &request,
                Some(INVOICE_TIMEOUT),
            )
            .await?;

        info!(
            invoice_id = %invoice.id,
            total = invoice.total,
            items = request.items.len(),
            "Created appointment invoice"
        );
        Ok(invoice)
    }

    /// Verify insurance coverage for an invoice
    ///
    /// POST /api/billing/insurance/verify
    pub async fn verify_insurance(
        &self,
        request: &InsuranceVerificationRequest,
    ) -> ClientResult<InsuranceVerification> {
        let verification: InsuranceVerification = self
            .http
            .post_json(&format!("{API_PREFIX}/insurance/verify"), request)
            .await?;

        info!(
            invoice_id = %request.invoice_id,
            claimed_amount = verification.claimed_amount,
            "Verified insurance coverage"
        );
        Ok(verification)
    }

    /// Submit an insurance claim for an invoice, forwarding the verification
    /// result wholesale
    ///
    /// POST /api/billing/insurance/claim
    pub async fn submit_insurance_claim(
        &self,
        invoice_id: &EntityId,
        verification: InsuranceVerification,
    ) -> ClientResult<ClaimRecord> {
        let request = ClaimRequest {
            invoice_id: invoice_id.clone(),
            claimed_amount: verification.claimed_amount,
            insurance_provider: verification.insurance_provider.clone(),
            policy_number: verification.policy_number.clone(),
            insurance_info: verification,
        };

        self.http
            .post_json_lenient(&format!("{API_PREFIX}/insurance/claim"), &request, None)
            .await
    }

    /// Process a payment against an invoice
    ///
    /// POST /api/billing/payments
    pub async fn process_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentRecord> {
        let payment: PaymentRecord = self
            .http
            .post_json_lenient(&format!("{API_PREFIX}/payments"), request, None)
            .await?;

        info!(
            payment_id = %payment.id,
            amount = payment.amount,
            status = %payment.status,
            "Processed payment"
        );
        Ok(payment)
    }

    /// Get a revenue report, optionally bounded by a date range
    ///
    /// GET /api/billing/reports/revenue?startDate=&endDate=
    pub async fn get_revenue_report(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ClientResult<serde_json::Value> {
        let mut query = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end));
        }

        self.http
            .get_json_query(&format!("{API_PREFIX}/reports/revenue"), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BillingDefaults;

    #[test]
    fn sampled_items_are_two_to_four_and_distinct() {
        let catalogue = BillingDefaults::default().item_catalogue;
        for _ in 0..200 {
            let items = sample_line_items(&catalogue);
            assert!(
                (2..=4).contains(&items.len()),
                "expected 2-4 items, got {}",
                items.len()
            );

            let mut descriptions: Vec<_> =
                items.iter().map(|i| i.description.as_str()).collect();
            descriptions.sort_unstable();
            descriptions.dedup();
            assert_eq!(descriptions.len(), items.len(), "duplicate item sampled");

            for item in &items {
                assert!(catalogue.contains(item), "item not from catalogue");
            }
        }
    }
}
