// Contract tests for the appointment transport surface.
//
// These validate the JSON shape of the DTO as serialized at the boundary:
// required fields present, camelCase names, flat identifier references and
// valid status tokens.

use chrono::NaiveDate;
use serde_json::{json, Value};

use barbearia::modules::appointments::models::{
    AppointmentStatus, ServiceAppointment, ServiceAppointmentDto,
};

fn sample_dto() -> ServiceAppointmentDto {
    ServiceAppointmentDto {
        id: 1,
        service_id: 1,
        barber_id: 1,
        client_name: "John Doe".to_string(),
        appointment_date_time: NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap(),
        status: AppointmentStatus::Pendente,
        available: true,
    }
}

#[test]
fn test_dto_serializes_with_camel_case_fields() {
    let body = serde_json::to_value(sample_dto()).unwrap();

    for field in [
        "id",
        "serviceId",
        "barberId",
        "clientName",
        "appointmentDateTime",
        "status",
        "available",
    ] {
        assert!(body.get(field).is_some(), "{} is required", field);
    }

    assert_eq!(body["id"], 1);
    assert_eq!(body["clientName"], "John Doe");
    assert_eq!(body["status"], "PENDENTE");
    assert_eq!(body["available"], true);
}

#[test]
fn test_dto_flattens_references_to_plain_ids() {
    let body = serde_json::to_value(sample_dto()).unwrap();

    // No embedded objects: the references are bare identifiers
    assert!(body["serviceId"].is_i64());
    assert!(body["barberId"].is_i64());
    assert!(body.get("service").is_none());
    assert!(body.get("barber").is_none());
}

#[test]
fn test_status_tokens_are_the_closed_set() {
    let valid: Vec<String> = AppointmentStatus::ALL
        .iter()
        .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_string())
        .collect();

    assert_eq!(
        valid,
        vec!["PENDENTE", "CONFIRMADO", "CONCLUIDO", "CANCELADO"]
    );

    let unknown: Result<AppointmentStatus, _> = serde_json::from_value(json!("AGENDADO"));
    assert!(unknown.is_err());
}

#[test]
fn test_create_request_schema() {
    let request = json!({
        "serviceId": 1,
        "barberId": 2,
        "clientName": "John Doe",
        "appointmentDateTime": "2025-03-10T14:30:00"
    });

    // Verify required fields
    assert!(request.get("serviceId").is_some(), "serviceId is required");
    assert!(request.get("barberId").is_some(), "barberId is required");
    assert!(
        request.get("clientName").is_some(),
        "clientName is required"
    );
    assert!(
        request.get("appointmentDateTime").is_some(),
        "appointmentDateTime is required"
    );

    // The payload parses into the typed request with its defaults applied
    let parsed: barbearia::modules::appointments::models::CreateAppointmentRequest =
        serde_json::from_value(request).unwrap();
    assert!(parsed.available);
    assert!(parsed.status.is_none());
}

#[test]
fn test_entity_round_trips_through_json() {
    let entity = ServiceAppointment {
        id: 7,
        service_id: 3,
        barber_id: 4,
        client_name: "Maria Souza".to_string(),
        appointment_date_time: NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        status: AppointmentStatus::Confirmado,
        available: false,
    };

    let value = serde_json::to_value(&entity).unwrap();
    let back: ServiceAppointment = serde_json::from_value(value).unwrap();

    assert_eq!(back.id, entity.id);
    assert_eq!(back.status, entity.status);
    assert_eq!(back.client_name, entity.client_name);
}

#[test]
fn test_error_body_shape() {
    // The transport wraps failures as {"error": {"message", "code"}}
    let body: Value = json!({
        "error": {
            "message": "Not found: Appointment with id 9 not found",
            "code": 404
        }
    });

    assert!(body["error"]["message"].is_string());
    assert_eq!(body["error"]["code"], 404);
}
