use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::barbers::models::Barber;

/// Persistence boundary for barber rows.
#[async_trait]
pub trait BarberStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Barber>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Barber>>;
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
    async fn create(&self, barber: &Barber) -> Result<Barber>;
    async fn update(&self, barber: &Barber) -> Result<Barber>;
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// MySQL-backed barber store
pub struct MySqlBarberStore {
    pool: MySqlPool,
}

impl MySqlBarberStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "id, name, email, phone, cpf, salary, address, admission_date, service_hours";

#[async_trait]
impl BarberStore for MySqlBarberStore {
    async fn find_all(&self) -> Result<Vec<Barber>> {
        let rows = sqlx::query_as::<_, Barber>(&format!(
            "SELECT {} FROM barbers ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Barber>> {
        let row = sqlx::query_as::<_, Barber>(&format!(
            "SELECT {} FROM barbers WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM barbers WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count > 0)
    }

    async fn create(&self, barber: &Barber) -> Result<Barber> {
        let result = sqlx::query(
            r#"
            INSERT INTO barbers
                (name, email, phone, cpf, salary, address, admission_date, service_hours)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&barber.name)
        .bind(&barber.email)
        .bind(&barber.phone)
        .bind(&barber.cpf)
        .bind(barber.salary)
        .bind(&barber.address)
        .bind(barber.admission_date)
        .bind(&barber.service_hours)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::validation(format!(
                        "Barber with cpf '{}' already exists",
                        barber.cpf
                    ));
                }
            }
            AppError::Database(e)
        })?;

        let mut created = barber.clone();
        created.id = result.last_insert_id() as i64;

        Ok(created)
    }

    async fn update(&self, barber: &Barber) -> Result<Barber> {
        let result = sqlx::query(
            r#"
            UPDATE barbers
            SET name = ?, email = ?, phone = ?, cpf = ?, salary = ?,
                address = ?, admission_date = ?, service_hours = ?
            WHERE id = ?
            "#,
        )
        .bind(&barber.name)
        .bind(&barber.email)
        .bind(&barber.phone)
        .bind(&barber.cpf)
        .bind(barber.salary)
        .bind(&barber.address)
        .bind(barber.admission_date)
        .bind(&barber.service_hours)
        .bind(barber.id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Barber with id {} not found",
                barber.id
            )));
        }

        Ok(barber.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM barbers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}
