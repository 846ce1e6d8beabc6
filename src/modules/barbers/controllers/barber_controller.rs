use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::barbers::models::BarberRequest;
use crate::modules::barbers::services::BarberService;

/// List all barbers
///
/// GET /barbers
pub async fn list_barbers(
    service: web::Data<Arc<BarberService>>,
) -> Result<HttpResponse, AppError> {
    let barbers = service.find_all().await?;

    Ok(HttpResponse::Ok().json(barbers))
}

/// Get barber by ID
///
/// GET /barbers/{id}
pub async fn get_barber(
    service: web::Data<Arc<BarberService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(barber) => Ok(HttpResponse::Ok().json(barber)),
        None => Err(AppError::not_found(format!(
            "Barber with id {} not found",
            id
        ))),
    }
}

/// Register a new barber
///
/// POST /barbers
pub async fn create_barber(
    service: web::Data<Arc<BarberService>>,
    request: web::Json<BarberRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

/// Replace an existing barber record
///
/// PUT /barbers/{id}
pub async fn update_barber(
    service: web::Data<Arc<BarberService>>,
    path: web::Path<i64>,
    request: web::Json<BarberRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let updated = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a barber
///
/// DELETE /barbers/{id}
pub async fn delete_barber(
    service: web::Data<Arc<BarberService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure barber routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/barbers")
            .route("", web::get().to(list_barbers))
            .route("", web::post().to(create_barber))
            .route("/{id}", web::get().to(get_barber))
            .route("/{id}", web::put().to(update_barber))
            .route("/{id}", web::delete().to(delete_barber)),
    );
}
