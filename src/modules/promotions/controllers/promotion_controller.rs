use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::promotions::models::PromotionRequest;
use crate::modules::promotions::services::PromotionService;

/// List all promotions
///
/// GET /promotions
pub async fn list_promotions(
    service: web::Data<Arc<PromotionService>>,
) -> Result<HttpResponse, AppError> {
    let promotions = service.find_all().await?;

    Ok(HttpResponse::Ok().json(promotions))
}

/// Get promotion by ID
///
/// GET /promotions/{id}
pub async fn get_promotion(
    service: web::Data<Arc<PromotionService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.find_by_id(id).await? {
        Some(promotion) => Ok(HttpResponse::Ok().json(promotion)),
        None => Err(AppError::not_found(format!(
            "Promotion with id {} not found",
            id
        ))),
    }
}

/// Create a new promotion
///
/// POST /promotions
pub async fn create_promotion(
    service: web::Data<Arc<PromotionService>>,
    request: web::Json<PromotionRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

/// Amend an existing promotion
///
/// PATCH /promotions/{id}
pub async fn update_promotion(
    service: web::Data<Arc<PromotionService>>,
    path: web::Path<i64>,
    request: web::Json<PromotionRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let updated = service.update(id, request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a promotion
///
/// DELETE /promotions/{id}
pub async fn delete_promotion(
    service: web::Data<Arc<PromotionService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure promotion routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/promotions")
            .route("", web::get().to(list_promotions))
            .route("", web::post().to(create_promotion))
            .route("/{id}", web::get().to(get_promotion))
            .route("/{id}", web::patch().to(update_promotion))
            .route("/{id}", web::delete().to(delete_promotion)),
    );
}
