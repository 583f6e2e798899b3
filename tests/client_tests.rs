//! Contract tests for the individual service bindings that the complete
//! flow doesn't exercise (lookups, delivery status, revenue report), plus
//! error mapping for non-2xx responses.

mod common;

use common::StubPlatform;
use medflow_client::models::EntityId;
use medflow_client::{
    AppointmentServiceClient, BillingServiceClient, ClientError, DoctorServiceClient,
    NotificationServiceClient, PatientServiceClient,
};

#[tokio::test]
async fn lookup_bindings_hit_their_endpoints() {
    let platform = StubPlatform::start(&[]).await;
    let services = &platform.config.services;

    let patient_id = EntityId::from(1);
    let doctor_id = EntityId::from(2);
    let appointment_id = EntityId::from(3);

    let patients = PatientServiceClient::new(&services.patient).unwrap();
    let patient = patients.get_patient(&patient_id).await.unwrap();
    assert_eq!(patient.full_name(), "Bob Williams");

    let doctors = DoctorServiceClient::new(&services.doctor).unwrap();
    let doctor = doctors.get_doctor(&doctor_id).await.unwrap();
    assert_eq!(doctor.full_name(), "Dr. John Smith");
    assert_eq!(doctor.specialization, "Cardiology");

    let appointments = AppointmentServiceClient::new(&services.appointment).unwrap();
    let appointment = appointments.get_appointment(&appointment_id).await.unwrap();
    assert_eq!(appointment.status, "SCHEDULED");

    let billing = BillingServiceClient::new(&services.billing).unwrap();
    let invoice = billing
        .get_invoice_by_appointment(&appointment_id)
        .await
        .unwrap();
    assert_eq!(invoice.total, 150.00);

    assert_eq!(platform.log.count("GET", "/api/patients/1"), 1);
    assert_eq!(platform.log.count("GET", "/api/doctors/2"), 1);
    assert_eq!(platform.log.count("GET", "/api/appointments/3"), 1);
    assert_eq!(
        platform.log.count("GET", "/api/billing/invoices/appointment/3"),
        1
    );
}

#[tokio::test]
async fn delivery_status_binding() {
    let platform = StubPlatform::start(&[]).await;

    let notifications =
        NotificationServiceClient::new(&platform.config.services.notification).unwrap();
    let status = notifications.get_delivery_status().await.unwrap();
    assert_eq!(status.total_sent, 3);
    assert_eq!(status.delivered, 2);
    assert_eq!(
        platform.log.count("GET", "/api/notifications/delivery-status"),
        1
    );
}

#[tokio::test]
async fn revenue_report_with_and_without_date_range() {
    let platform = StubPlatform::start(&[]).await;
    let billing = BillingServiceClient::new(&platform.config.services.billing).unwrap();

    let report = billing.get_revenue_report(None, None).await.unwrap();
    assert_eq!(report["totalRevenue"], 80.0);

    billing
        .get_revenue_report(Some("2025-12-01"), Some("2025-12-31"))
        .await
        .unwrap();

    assert_eq!(platform.log.count("GET", "/api/billing/reports/revenue"), 2);
}

#[tokio::test]
async fn non_2xx_maps_to_api_error_with_service_and_status() {
    let platform = StubPlatform::start(&["patient.get"]).await;
    let patients = PatientServiceClient::new(&platform.config.services.patient).unwrap();

    let err = patients
        .get_patient(&EntityId::from(1))
        .await
        .expect_err("stubbed 500 should surface");

    match err {
        ClientError::ApiError {
            service, status, ..
        } => {
            assert_eq!(service, "patient");
            assert_eq!(status, 500);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn string_ids_are_passed_through_in_paths() {
    let platform = StubPlatform::start(&[]).await;
    let doctors = DoctorServiceClient::new(&platform.config.services.doctor).unwrap();

    doctors
        .get_doctor(&EntityId::from("doc-2b"))
        .await
        .unwrap();
    assert_eq!(platform.log.count("GET", "/api/doctors/doc-2b"), 1);
}
