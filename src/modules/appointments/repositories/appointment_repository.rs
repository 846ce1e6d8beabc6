use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::appointments::models::{AppointmentStatus, ServiceAppointment};

/// Persistence boundary for appointment rows.
///
/// The backing store serializes conflicting writes; nothing here adds locking
/// on top, so a concurrent update and delete of the same id is a known race
/// the transport accepts.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// All appointments in the store's natural order.
    async fn find_all(&self) -> Result<Vec<ServiceAppointment>>;

    /// Single appointment, absent when no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceAppointment>>;

    /// Appointments referencing the given barber; empty when none.
    async fn find_by_barber_id(&self, barber_id: i64) -> Result<Vec<ServiceAppointment>>;

    /// Appointments whose status equals the given value.
    async fn find_by_status(&self, status: AppointmentStatus)
        -> Result<Vec<ServiceAppointment>>;

    /// Appointments still offered as bookable slots.
    async fn find_available(&self) -> Result<Vec<ServiceAppointment>>;

    /// Existence check used as the delete pre-check.
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Insert a new row; the input id is ignored and the stored row with the
    /// assigned id is returned.
    async fn create(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment>;

    /// Persist every field of an existing row.
    async fn update(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment>;

    /// Hard delete. Removing an absent id is a no-op; callers distinguish the
    /// cases through `exists_by_id`.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// MySQL-backed appointment store
pub struct MySqlAppointmentStore {
    pool: MySqlPool,
}

impl MySqlAppointmentStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "id, service_id, barber_id, client_name, appointment_date_time, status, available";

#[async_trait]
impl AppointmentStore for MySqlAppointmentStore {
    async fn find_all(&self) -> Result<Vec<ServiceAppointment>> {
        let rows = sqlx::query_as::<_, ServiceAppointment>(&format!(
            "SELECT {} FROM service_appointments ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceAppointment>> {
        let row = sqlx::query_as::<_, ServiceAppointment>(&format!(
            "SELECT {} FROM service_appointments WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn find_by_barber_id(&self, barber_id: i64) -> Result<Vec<ServiceAppointment>> {
        let rows = sqlx::query_as::<_, ServiceAppointment>(&format!(
            "SELECT {} FROM service_appointments WHERE barber_id = ? ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(barber_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<ServiceAppointment>> {
        let rows = sqlx::query_as::<_, ServiceAppointment>(&format!(
            "SELECT {} FROM service_appointments WHERE status = ? ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn find_available(&self) -> Result<Vec<ServiceAppointment>> {
        let rows = sqlx::query_as::<_, ServiceAppointment>(&format!(
            "SELECT {} FROM service_appointments WHERE available = TRUE ORDER BY id",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM service_appointments WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(count > 0)
    }

    async fn create(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment> {
        let result = sqlx::query(
            r#"
            INSERT INTO service_appointments
                (service_id, barber_id, client_name, appointment_date_time, status, available)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(appointment.service_id)
        .bind(appointment.barber_id)
        .bind(&appointment.client_name)
        .bind(appointment.appointment_date_time)
        .bind(appointment.status)
        .bind(appointment.available)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut created = appointment.clone();
        created.id = result.last_insert_id() as i64;

        Ok(created)
    }

    async fn update(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment> {
        let result = sqlx::query(
            r#"
            UPDATE service_appointments
            SET service_id = ?, barber_id = ?, client_name = ?,
                appointment_date_time = ?, status = ?, available = ?
            WHERE id = ?
            "#,
        )
        .bind(appointment.service_id)
        .bind(appointment.barber_id)
        .bind(&appointment.client_name)
        .bind(appointment.appointment_date_time)
        .bind(appointment.status)
        .bind(appointment.available)
        .bind(appointment.id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Appointment with id {} not found",
                appointment.id
            )));
        }

        Ok(appointment.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM service_appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}
