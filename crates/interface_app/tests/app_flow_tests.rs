//! End-to-end flows through the composition root
//!
//! These wire the real stack (services, gateway, session) against a mock
//! backend and walk the screens' paths: login, an authorized list read,
//! claim submission, and the forced-logout path on a 401.

use httpmock::prelude::*;
use serde_json::json;
use uuid::Uuid;

use interface_app::{AppConfig, AppError, AppServices};
use domain_registry::ports::{SpecialtiesPort as _, WardsPort as _};
use domain_registry::DoctorFilters;
use test_utils::ClaimFormBuilder;

fn services_against(server: &MockServer) -> AppServices {
    let mut config = AppConfig::default();
    config.endpoints = infra_http::ServiceEndpoints::single_host(server.base_url());
    AppServices::build(&config).unwrap()
}

fn login_mock(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(json!({
            "message": "Login successful",
            "access_token": "tok-e2e",
            "user": {
                "uid": "admin-1",
                "role": "hospital_admin",
                "name": "Admin",
                "email": "admin@hospital.example"
            }
        }));
    });
}

#[tokio::test]
async fn login_then_authorized_list() {
    let server = MockServer::start();
    login_mock(&server);
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/doctors")
            .header("authorization", "Bearer tok-e2e");
        then.status(200).json_body(json!({
            "message": "ok",
            "doctors": [{
                "doctor_id": Uuid::new_v4(),
                "doctor_name": "Dr. Prakash Nair",
                "hospital_id": Uuid::new_v4(),
                "department_id": Uuid::new_v4(),
                "department_name": "Cardiac Sciences",
                "specialty_id": Uuid::new_v4(),
                "specialty_name": "Cardiology",
                "status": "active"
            }]
        }));
    });

    let services = services_against(&server);
    services
        .auth
        .login("admin@hospital.example", "secret")
        .await
        .unwrap();

    let page = services.doctors.list(&DoctorFilters::default()).await.unwrap();
    list.assert();
    assert_eq!(page.items[0].doctor_name, "Dr. Prakash Nair");
}

#[tokio::test]
async fn claim_submission_end_to_end() {
    let server = MockServer::start();
    login_mock(&server);
    server.mock(|when, then| {
        when.method(POST).path("/claims/");
        then.status(200).json_body(json!({
            "claim_id": "CLM-900",
            "message": "Claim submitted"
        }));
    });

    let services = services_against(&server);
    services
        .auth
        .login("admin@hospital.example", "secret")
        .await
        .unwrap();

    let form = ClaimFormBuilder::new().build();
    let response = services.claims.submit(&form, Vec::new()).await.unwrap();
    assert_eq!(response.claim_id, "CLM-900");
}

#[tokio::test]
async fn expired_token_forces_logout_path() {
    let server = MockServer::start();
    login_mock(&server);
    server.mock(|when, then| {
        when.method(GET).path("/doctors");
        then.status(401).json_body(json!({ "error": "Token expired" }));
    });

    let services = services_against(&server);
    services
        .auth
        .login("admin@hospital.example", "secret")
        .await
        .unwrap();

    let err = services
        .doctors
        .list(&DoctorFilters::default())
        .await
        .unwrap_err();

    // The shell routes to login; the session is already gone
    assert!(err.requires_login());
    assert!(services.session.get().unwrap().is_none());
}

#[tokio::test]
async fn claim_form_lookups_load() {
    let server = MockServer::start();
    login_mock(&server);
    server.mock(|when, then| {
        when.method(GET).path("/specialty-affiliations/affiliated-specialties");
        then.status(200).json_body(json!({
            "specialty_names": ["Cardiology", "Nephrology"]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/wards");
        then.status(200).json_body(json!({
            "wards": [{
                "ward_id": Uuid::new_v4(),
                "ward_name": "GENERAL",
                "hospital_id": Uuid::new_v4(),
                "bed_count": 40,
                "status": "active"
            }]
        }));
    });

    let services = services_against(&server);
    services
        .auth
        .login("admin@hospital.example", "secret")
        .await
        .unwrap();

    let specialties = services.specialties.affiliated_specialty_names().await.unwrap();
    assert_eq!(specialties, vec!["Cardiology", "Nephrology"]);

    let wards = services.wards.list_wards().await.unwrap();
    assert_eq!(wards[0].ward_name, "GENERAL");
}

#[tokio::test]
async fn over_authorized_claim_never_hits_backend() {
    let server = MockServer::start();
    login_mock(&server);
    let submit = server.mock(|when, then| {
        when.method(POST).path("/claims/");
        then.status(200).json_body(json!({ "claim_id": "CLM-901" }));
    });

    let services = services_against(&server);
    services
        .auth
        .login("admin@hospital.example", "secret")
        .await
        .unwrap();

    let form = ClaimFormBuilder::new()
        .with("total_authorized_amount", "100")
        .build();
    let err = services.claims.submit(&form, Vec::new()).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    submit.assert_hits(0);
}
