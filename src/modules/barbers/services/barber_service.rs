use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::barbers::models::{Barber, BarberRequest};
use crate::modules::barbers::repositories::BarberStore;

/// Business logic for barber records.
pub struct BarberService {
    store: Arc<dyn BarberStore>,
}

impl BarberService {
    pub fn new(store: Arc<dyn BarberStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Barber>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Barber>> {
        self.store.find_by_id(id).await
    }

    pub async fn create(&self, request: BarberRequest) -> Result<Barber> {
        request.validate()?;
        self.store.create(&request.into_barber(0)).await
    }

    /// Full replacement of an existing barber record.
    pub async fn update(&self, id: i64, request: BarberRequest) -> Result<Barber> {
        request.validate()?;

        if !self.store.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Barber with id {} not found",
                id
            )));
        }

        self.store.update(&request.into_barber(id)).await
    }

    /// Deleting an absent id is an error here, not a silent no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::not_found(format!(
                "Barber with id {} not found",
                id
            )));
        }

        self.store.delete_by_id(id).await
    }
}
