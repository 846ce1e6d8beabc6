use std::str::FromStr;
use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::appointments::models::{
    AppointmentStatus, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::modules::appointments::services::AppointmentService;

/// List all appointments
///
/// GET /appointments
pub async fn list_appointments(
    service: web::Data<Arc<AppointmentService>>,
) -> Result<HttpResponse, AppError> {
    let appointments = service.find_all().await?;
    let dtos: Vec<_> = appointments.iter().map(|a| service.to_dto(a)).collect();

    Ok(HttpResponse::Ok().json(dtos))
}

/// Get appointment by ID
///
/// GET /appointments/{id}
pub async fn get_appointment(
    service: web::Data<Arc<AppointmentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(appointment) => Ok(HttpResponse::Ok().json(service.to_dto(&appointment))),
        None => Err(AppError::not_found(format!(
            "Appointment with id {} not found",
            id
        ))),
    }
}

/// List appointments for one barber
///
/// GET /appointments/barber/{barberId}
pub async fn list_by_barber(
    service: web::Data<Arc<AppointmentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let barber_id = path.into_inner();
    let appointments = service.find_by_barber_id(barber_id).await?;
    let dtos: Vec<_> = appointments.iter().map(|a| service.to_dto(a)).collect();

    Ok(HttpResponse::Ok().json(dtos))
}

/// List appointments with a given status. An unknown token is a client
/// error, distinct from an empty result.
///
/// GET /appointments/status/{status}
pub async fn list_by_status(
    service: web::Data<Arc<AppointmentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    let status = AppointmentStatus::from_str(&token).map_err(AppError::Validation)?;

    let appointments = service.find_by_status(status).await?;
    let dtos: Vec<_> = appointments.iter().map(|a| service.to_dto(a)).collect();

    Ok(HttpResponse::Ok().json(dtos))
}

/// List slots still offered for booking
///
/// GET /appointments/available
pub async fn list_available(
    service: web::Data<Arc<AppointmentService>>,
) -> Result<HttpResponse, AppError> {
    let appointments = service.find_available().await?;
    let dtos: Vec<_> = appointments.iter().map(|a| service.to_dto(a)).collect();

    Ok(HttpResponse::Ok().json(dtos))
}

/// Create a new appointment
///
/// POST /appointments
pub async fn create_appointment(
    service: web::Data<Arc<AppointmentService>>,
    request: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(service.to_dto(&created)))
}

/// Partially update an appointment
///
/// PATCH /appointments/{id}
pub async fn update_appointment(
    service: web::Data<Arc<AppointmentService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let updated = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(service.to_dto(&updated)))
}

/// Delete an appointment. Existence is checked first so an absent id maps to
/// not-found instead of a silent no-op.
///
/// DELETE /appointments/{id}
pub async fn delete_appointment(
    service: web::Data<Arc<AppointmentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if !service.exists_by_id(id).await? {
        return Err(AppError::not_found(format!(
            "Appointment with id {} not found",
            id
        )));
    }

    service.delete_by_id(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure appointment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/appointments")
            .route("", web::get().to(list_appointments))
            .route("", web::post().to(create_appointment))
            .route("/available", web::get().to(list_available))
            .route("/barber/{barber_id}", web::get().to(list_by_barber))
            .route("/status/{status}", web::get().to(list_by_status))
            .route("/{id}", web::get().to(get_appointment))
            .route("/{id}", web::patch().to(update_appointment))
            .route("/{id}", web::delete().to(delete_appointment)),
    );
}
