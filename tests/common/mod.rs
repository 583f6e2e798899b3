//! Stub backing services for integration tests.
//!
//! Spins up all six services as in-process axum servers on ephemeral ports,
//! returning canned bodies and recording every call (method, path, JSON
//! body) in a shared log so tests can assert exact invocation counts and
//! payload shapes. Individual endpoints can be told to fail with HTTP 500
//! by name.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use medflow_client::ClientConfig;

/// One recorded request
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Value,
}

/// Shared log of every request the stubs received
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<RecordedCall>>>);

impl CallLog {
    fn record(&self, method: &str, path: impl Into<String>, body: Value) {
        self.0.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.into(),
            body,
        });
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    pub fn total(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn bodies(&self, method: &str, path: &str) -> Vec<Value> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .map(|c| c.body.clone())
            .collect()
    }
}

#[derive(Clone)]
struct Stub {
    log: CallLog,
    failures: Arc<HashSet<String>>,
}

impl Stub {
    /// Record the call, then either fail (if this endpoint was marked) or
    /// answer with the canned body.
    fn respond(&self, key: &str, method: &str, path: String, body: Value, ok: Value) -> Response {
        self.log.record(method, path, body);
        if self.failures.contains(key) {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("{key} stubbed to fail")})),
            )
                .into_response()
        } else {
            Json(ok).into_response()
        }
    }
}

/// All six stub services plus a client configuration pointing at them
pub struct StubPlatform {
    pub log: CallLog,
    pub config: ClientConfig,
}

impl StubPlatform {
    /// Start all six stubs. `failures` names endpoints that answer 500,
    /// e.g. `"patient.register"` or `"notification.list"`.
    pub async fn start(failures: &[&str]) -> Self {
        let log = CallLog::default();
        let stub = Stub {
            log: log.clone(),
            failures: Arc::new(failures.iter().map(|s| s.to_string()).collect()),
        };

        let mut config = ClientConfig::default();
        config.services.patient.base_url = serve(patient_router(stub.clone())).await;
        config.services.doctor.base_url = serve(doctor_router(stub.clone())).await;
        config.services.appointment.base_url = serve(appointment_router(stub.clone())).await;
        config.services.notification.base_url = serve(notification_router(stub.clone())).await;
        config.services.billing.base_url = serve(billing_router(stub.clone())).await;
        config.services.analytics.base_url = serve(analytics_router(stub)).await;

        // No async side effects to wait for against stubs
        config.flow.delays.notification_settle_ms = 0;
        config.flow.delays.invoice_settle_ms = 0;
        config.flow.delays.analytics_settle_ms = 0;

        Self { log, config }
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}")
}

// Canned identifiers: patient 1, doctor 2, appointment 3, invoice 4,
// payment 5, claim 6.

fn patient_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/patients/register",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                let email = body["email"].clone();
                stub.respond(
                    "patient.register",
                    "POST",
                    "/api/patients/register".to_string(),
                    body,
                    json!({
                        "id": 1,
                        "firstName": "Bob",
                        "lastName": "Williams",
                        "email": email,
                    }),
                )
            }),
        )
        .route(
            "/api/patients/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "patient.get",
                    "GET",
                    format!("/api/patients/{id}"),
                    Value::Null,
                    json!({
                        "id": 1,
                        "firstName": "Bob",
                        "lastName": "Williams",
                        "email": "user.abcd1234@test.local",
                    }),
                )
            }),
        )
        .route(
            "/api/patients/:id/insurance",
            put(
                |State(stub): State<Stub>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    let ok = body.clone();
                    stub.respond(
                        "patient.insurance",
                        "PUT",
                        format!("/api/patients/{id}/insurance"),
                        body,
                        ok,
                    )
                },
            ),
        )
        .with_state(stub)
}

fn doctor_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/doctors/register",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                stub.respond(
                    "doctor.register",
                    "POST",
                    "/api/doctors/register".to_string(),
                    body,
                    json!({
                        "id": 2,
                        "firstName": "John",
                        "lastName": "Smith",
                        "specialization": "Cardiology",
                    }),
                )
            }),
        )
        .route(
            "/api/doctors/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "doctor.get",
                    "GET",
                    format!("/api/doctors/{id}"),
                    Value::Null,
                    json!({
                        "id": 2,
                        "firstName": "John",
                        "lastName": "Smith",
                        "specialization": "Cardiology",
                    }),
                )
            }),
        )
        .route(
            "/api/doctors/:id/availability",
            post(
                |State(stub): State<Stub>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    let ok = body.clone();
                    stub.respond(
                        "doctor.availability",
                        "POST",
                        format!("/api/doctors/{id}/availability"),
                        body,
                        ok,
                    )
                },
            ),
        )
        .route(
            "/api/doctors/:id/reviews",
            post(
                |State(stub): State<Stub>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    stub.respond(
                        "doctor.review",
                        "POST",
                        format!("/api/doctors/{id}/reviews"),
                        body,
                        json!({"id": 7, "rating": 5.0}),
                    )
                },
            ),
        )
        .with_state(stub)
}

fn appointment_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/appointments",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                let start_time = body["startTime"].clone();
                stub.respond(
                    "appointment.schedule",
                    "POST",
                    "/api/appointments".to_string(),
                    body,
                    json!({
                        "id": 3,
                        "startTime": start_time,
                        "status": "SCHEDULED",
                    }),
                )
            }),
        )
        .route(
            "/api/appointments/available-slots",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "appointment.slots",
                    "GET",
                    "/api/appointments/available-slots".to_string(),
                    Value::Null,
                    json!([
                        {"startTime": "2025-12-15T09:00:00", "endTime": "2025-12-15T10:00:00"},
                        {"startTime": "2025-12-15T10:00:00", "endTime": "2025-12-15T11:00:00"},
                    ]),
                )
            }),
        )
        .route(
            "/api/appointments/statistics",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "appointment.statistics",
                    "GET",
                    "/api/appointments/statistics".to_string(),
                    Value::Null,
                    json!({
                        "totalAppointments": 1,
                        "completed": 1,
                        "completionRate": 100.0,
                    }),
                )
            }),
        )
        .route(
            "/api/appointments/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "appointment.get",
                    "GET",
                    format!("/api/appointments/{id}"),
                    Value::Null,
                    json!({
                        "id": 3,
                        "startTime": "2025-12-15T10:00:00",
                        "status": "SCHEDULED",
                    }),
                )
            }),
        )
        .route(
            "/api/appointments/:id/confirm",
            post(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "appointment.confirm",
                    "POST",
                    format!("/api/appointments/{id}/confirm"),
                    Value::Null,
                    json!({"id": 3, "status": "CONFIRMED"}),
                )
            }),
        )
        .route(
            "/api/appointments/:id/check-in",
            post(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "appointment.check_in",
                    "POST",
                    format!("/api/appointments/{id}/check-in"),
                    Value::Null,
                    json!({"id": 3, "status": "CHECKED_IN"}),
                )
            }),
        )
        .route(
            "/api/appointments/:id/complete",
            post(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "appointment.complete",
                    "POST",
                    format!("/api/appointments/{id}/complete"),
                    Value::Null,
                    json!({"id": 3, "status": "COMPLETED"}),
                )
            }),
        )
        .with_state(stub)
}

fn notification_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/notifications/patient/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "notification.list",
                    "GET",
                    format!("/api/notifications/patient/{id}"),
                    Value::Null,
                    json!([
                        {"subject": "Appointment Confirmed", "status": "SENT"},
                        {"subject": "Appointment Reminder", "status": "PENDING"},
                        {"subject": "Visit Summary", "status": "SENT"},
                    ]),
                )
            }),
        )
        .route(
            "/api/notifications/delivery-status",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "notification.delivery_status",
                    "GET",
                    "/api/notifications/delivery-status".to_string(),
                    Value::Null,
                    json!({"totalSent": 3, "delivered": 2, "failed": 0}),
                )
            }),
        )
        .with_state(stub)
}

fn billing_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/billing/invoices",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                stub.respond(
                    "billing.create_invoice",
                    "POST",
                    "/api/billing/invoices".to_string(),
                    body,
                    json!({"id": 4, "total": 150.00, "status": "PENDING"}),
                )
            }),
        )
        .route(
            "/api/billing/invoices/appointment/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "billing.get_invoice",
                    "GET",
                    format!("/api/billing/invoices/appointment/{id}"),
                    Value::Null,
                    json!({"id": 4, "total": 150.00, "status": "PENDING"}),
                )
            }),
        )
        .route(
            "/api/billing/insurance/verify",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                let provider = body["insuranceProvider"].clone();
                let policy = body["policyNumber"].clone();
                stub.respond(
                    "billing.verify",
                    "POST",
                    "/api/billing/insurance/verify".to_string(),
                    body,
                    json!({
                        "claimedAmount": 80.0,
                        "insuranceProvider": provider,
                        "policyNumber": policy,
                        "verificationStatus": "APPROVED",
                    }),
                )
            }),
        )
        .route(
            "/api/billing/insurance/claim",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                stub.respond(
                    "billing.claim",
                    "POST",
                    "/api/billing/insurance/claim".to_string(),
                    body,
                    json!({"id": 6, "status": "SUBMITTED"}),
                )
            }),
        )
        .route(
            "/api/billing/payments",
            post(|State(stub): State<Stub>, Json(body): Json<Value>| async move {
                let amount = body["amount"].clone();
                stub.respond(
                    "billing.payment",
                    "POST",
                    "/api/billing/payments".to_string(),
                    body,
                    json!({
                        "id": 5,
                        "amount": amount,
                        "status": "COMPLETED",
                        "transactionId": "txn-0001",
                    }),
                )
            }),
        )
        .route(
            "/api/billing/reports/revenue",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "billing.revenue_report",
                    "GET",
                    "/api/billing/reports/revenue".to_string(),
                    Value::Null,
                    json!({"totalRevenue": 80.0, "totalPayments": 1}),
                )
            }),
        )
        .with_state(stub)
}

fn analytics_router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/analytics/system/overview",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "analytics.overview",
                    "GET",
                    "/api/analytics/system/overview".to_string(),
                    Value::Null,
                    json!({"systemStatus": "HEALTHY", "totalEventsTracked": 12}),
                )
            }),
        )
        .route(
            "/api/analytics/revenue",
            get(|State(stub): State<Stub>| async move {
                stub.respond(
                    "analytics.revenue",
                    "GET",
                    "/api/analytics/revenue".to_string(),
                    Value::Null,
                    json!({"totalRevenue": 80.0, "totalTransactions": 1}),
                )
            }),
        )
        .route(
            "/api/analytics/doctor/:id",
            get(|State(stub): State<Stub>, Path(id): Path<String>| async move {
                stub.respond(
                    "analytics.doctor",
                    "GET",
                    format!("/api/analytics/doctor/{id}"),
                    Value::Null,
                    json!({
                        "totalAppointments": 1,
                        "completionRate": 100.0,
                        "averageRating": 5.0,
                    }),
                )
            }),
        )
        .with_state(stub)
}
