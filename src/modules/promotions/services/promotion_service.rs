use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::promotions::models::{Promotion, PromotionRequest};
use crate::modules::promotions::repositories::PromotionStore;

/// Business logic for promotions.
pub struct PromotionService {
    store: Arc<dyn PromotionStore>,
}

impl PromotionService {
    pub fn new(store: Arc<dyn PromotionStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Promotion>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Promotion>> {
        self.store.find_by_id(id).await
    }

    pub async fn create(&self, request: PromotionRequest) -> Result<Promotion> {
        request.validate()?;
        self.store.create(&request.into_promotion(0)).await
    }

    pub async fn update(&self, id: i64, request: PromotionRequest) -> Result<Promotion> {
        request.validate()?;

        if !self.store.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Promotion with id {} not found",
                id
            )));
        }

        self.store.update(&request.into_promotion(id)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Promotion with id {} not found",
                id
            )));
        }

        self.store.delete_by_id(id).await
    }
}
