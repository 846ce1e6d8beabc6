use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::promotions::models::Promotion;

/// Persistence boundary for promotion rows.
#[async_trait]
pub trait PromotionStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Promotion>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Promotion>>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
    async fn create(&self, promotion: &Promotion) -> Result<Promotion>;
    async fn update(&self, promotion: &Promotion) -> Result<Promotion>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// MySQL-backed promotion store
pub struct MySqlPromotionStore {
    pool: MySqlPool,
}

impl MySqlPromotionStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "id, name, description, discount, category, available_until, active";

#[async_trait]
impl PromotionStore for MySqlPromotionStore {
    async fn find_all(&self) -> Result<Vec<Promotion>> {
        let rows = sqlx::query_as::<_, Promotion>(&format!(
            "SELECT {} FROM promotions ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Promotion>> {
        let row = sqlx::query_as::<_, Promotion>(&format!(
            "SELECT {} FROM promotions WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM promotions WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count > 0)
    }

    async fn create(&self, promotion: &Promotion) -> Result<Promotion> {
        let result = sqlx::query(
            r#"
            INSERT INTO promotions
                (name, description, discount, category, available_until, active)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&promotion.name)
        .bind(&promotion.description)
        .bind(promotion.discount)
        .bind(&promotion.category)
        .bind(promotion.available_until)
        .bind(promotion.active)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut created = promotion.clone();
        created.id = result.last_insert_id() as i64;

        Ok(created)
    }

    async fn update(&self, promotion: &Promotion) -> Result<Promotion> {
        let result = sqlx::query(
            r#"
            UPDATE promotions
            SET name = ?, description = ?, discount = ?, category = ?,
                available_until = ?, active = ?
            WHERE id = ?
            "#,
        )
        .bind(&promotion.name)
        .bind(&promotion.description)
        .bind(promotion.discount)
        .bind(&promotion.category)
        .bind(promotion.available_until)
        .bind(promotion.active)
        .bind(promotion.id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Promotion with id {} not found",
                promotion.id
            )));
        }

        Ok(promotion.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM promotions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}
