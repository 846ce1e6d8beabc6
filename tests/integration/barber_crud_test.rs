// Router-level tests for the barber CRUD surface.

mod support;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::Value;

use barbearia::modules::barbers::{self, BarberService};

use support::{sample_barber, InMemoryBarberStore};

fn service_with(rows: Vec<barbearia::modules::barbers::Barber>) -> Arc<BarberService> {
    Arc::new(BarberService::new(Arc::new(InMemoryBarberStore::with_rows(
        rows,
    ))))
}

macro_rules! barber_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service.clone()))
                .service(web::scope("/api").configure(barbers::controllers::configure)),
        )
        .await
    };
}

fn valid_payload() -> Value {
    serde_json::json!({
        "name": "Carlos Silva",
        "email": "carlos@unicortes.org",
        "phone": "81999990000",
        "cpf": "12345678901",
        "salary": "2500.00",
        "address": "Rua das Flores, 100",
        "admissionDate": "2023-05-02",
        "serviceHours": "ter-sab 09:00-18:00"
    })
}

#[actix_web::test]
async fn test_list_barbers() {
    let service = service_with(vec![sample_barber(1)]);
    let app = barber_app!(service);

    let req = test::TestRequest::get().uri("/api/barbers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Carlos Silva");
    assert_eq!(body[0]["cpf"], "12345678901");
}

#[actix_web::test]
async fn test_get_absent_barber_is_not_found() {
    let service = service_with(vec![]);
    let app = barber_app!(service);

    let req = test::TestRequest::get().uri("/api/barbers/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_create_barber_is_created() {
    let service = service_with(vec![]);
    let app = barber_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/barbers")
        .set_json(valid_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
}

#[actix_web::test]
async fn test_create_with_short_cpf_is_bad_request() {
    let service = service_with(vec![]);
    let app = barber_app!(service);

    let mut payload = valid_payload();
    payload["cpf"] = Value::String("123".to_string());

    let req = test::TestRequest::post()
        .uri("/api/barbers")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_update_replaces_record() {
    let service = service_with(vec![sample_barber(1)]);
    let app = barber_app!(service);

    let mut payload = valid_payload();
    payload["name"] = Value::String("Carlos A. Silva".to_string());

    let req = test::TestRequest::put()
        .uri("/api/barbers/1")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Carlos A. Silva");
}

#[actix_web::test]
async fn test_update_absent_barber_is_not_found() {
    let service = service_with(vec![]);
    let app = barber_app!(service);

    let req = test::TestRequest::put()
        .uri("/api/barbers/9")
        .set_json(valid_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_barber_twice() {
    let service = service_with(vec![sample_barber(1)]);
    let app = barber_app!(service);

    let req = test::TestRequest::delete().uri("/api/barbers/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::delete().uri("/api/barbers/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
