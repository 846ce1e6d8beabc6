use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::appointments::models::{
    AppointmentStatus, CreateAppointmentRequest, ServiceAppointment, ServiceAppointmentDto,
    UpdateAppointmentRequest,
};
use crate::modules::appointments::repositories::AppointmentStore;

/// Business logic for service appointments, isolated from transport and
/// storage concerns. Holds the store behind a trait object so the transport
/// composes it explicitly.
pub struct AppointmentService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<ServiceAppointment>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ServiceAppointment>> {
        self.store.find_by_id(id).await
    }

    pub async fn find_by_barber_id(&self, barber_id: i64) -> Result<Vec<ServiceAppointment>> {
        self.store.find_by_barber_id(barber_id).await
    }

    pub async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<ServiceAppointment>> {
        self.store.find_by_status(status).await
    }

    /// Slots still offered for booking (`available == true`).
    pub async fn find_available(&self) -> Result<Vec<ServiceAppointment>> {
        self.store.find_available().await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.store.exists_by_id(id).await
    }

    /// Hard delete. The transport is expected to run `exists_by_id` first and
    /// map an absent id to a not-found response.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await
    }

    /// Validate and persist a new appointment; the store assigns the id.
    pub async fn create(&self, request: CreateAppointmentRequest) -> Result<ServiceAppointment> {
        request.validate()?;

        let appointment = ServiceAppointment {
            id: 0, // assigned by the store
            service_id: request.service_id,
            barber_id: request.barber_id,
            client_name: request.client_name,
            appointment_date_time: request.appointment_date_time,
            status: request.status.unwrap_or_default(),
            available: request.available,
        };

        self.store.create(&appointment).await
    }

    /// Apply a partial update to an existing appointment. Status assignment
    /// is unrestricted; the domain defines no transition table.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<ServiceAppointment> {
        request.validate()?;

        let mut appointment = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Appointment with id {} not found", id)))?;

        if let Some(service_id) = request.service_id {
            appointment.service_id = service_id;
        }
        if let Some(barber_id) = request.barber_id {
            appointment.barber_id = barber_id;
        }
        if let Some(client_name) = request.client_name {
            appointment.client_name = client_name;
        }
        if let Some(appointment_date_time) = request.appointment_date_time {
            appointment.appointment_date_time = appointment_date_time;
        }
        if let Some(status) = request.status {
            appointment.status = status;
        }
        if let Some(available) = request.available {
            appointment.available = available;
        }

        self.store.update(&appointment).await
    }

    /// Pure projection from entity to transfer representation. Copies every
    /// field and flattens the references to plain identifiers.
    pub fn to_dto(&self, appointment: &ServiceAppointment) -> ServiceAppointmentDto {
        ServiceAppointmentDto {
            id: appointment.id,
            service_id: appointment.service_id,
            barber_id: appointment.barber_id,
            client_name: appointment.client_name.clone(),
            appointment_date_time: appointment.appointment_date_time,
            status: appointment.status,
            available: appointment.available,
        }
    }
}
