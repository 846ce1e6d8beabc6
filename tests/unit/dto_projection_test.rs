// Property-based tests for the entity-to-DTO projection: a pure, total
// mapping that copies every field and flattens references to plain ids.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use proptest::prelude::*;

use barbearia::core::Result;
use barbearia::modules::appointments::models::{AppointmentStatus, ServiceAppointment};
use barbearia::modules::appointments::{AppointmentService, AppointmentStore};

/// Store that holds nothing; the projection never touches it.
struct NullStore;

#[async_trait]
impl AppointmentStore for NullStore {
    async fn find_all(&self) -> Result<Vec<ServiceAppointment>> {
        Ok(vec![])
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<ServiceAppointment>> {
        Ok(None)
    }

    async fn find_by_barber_id(&self, _barber_id: i64) -> Result<Vec<ServiceAppointment>> {
        Ok(vec![])
    }

    async fn find_by_status(
        &self,
        _status: AppointmentStatus,
    ) -> Result<Vec<ServiceAppointment>> {
        Ok(vec![])
    }

    async fn find_available(&self) -> Result<Vec<ServiceAppointment>> {
        Ok(vec![])
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool> {
        Ok(false)
    }

    async fn create(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment> {
        Ok(appointment.clone())
    }

    async fn update(&self, appointment: &ServiceAppointment) -> Result<ServiceAppointment> {
        Ok(appointment.clone())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<()> {
        Ok(())
    }
}

fn make_service() -> AppointmentService {
    AppointmentService::new(Arc::new(NullStore))
}

fn status_from_index(index: usize) -> AppointmentStatus {
    AppointmentStatus::ALL[index % AppointmentStatus::ALL.len()]
}

fn datetime_from_seconds(seconds: i64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp(seconds, 0)
        .expect("timestamp in range")
        .naive_utc()
}

proptest! {
    #[test]
    fn to_dto_copies_every_field(
        id in 1i64..1_000_000,
        service_id in 1i64..10_000,
        barber_id in 1i64..10_000,
        client_name in "[a-zA-Z ]{1,40}",
        seconds in 0i64..2_000_000_000,
        status_index in 0usize..4,
        available in any::<bool>(),
    ) {
        let entity = ServiceAppointment {
            id,
            service_id,
            barber_id,
            client_name: client_name.clone(),
            appointment_date_time: datetime_from_seconds(seconds),
            status: status_from_index(status_index),
            available,
        };

        let service = make_service();
        let dto = service.to_dto(&entity);

        prop_assert_eq!(dto.id, entity.id);
        prop_assert_eq!(dto.service_id, entity.service_id);
        prop_assert_eq!(dto.barber_id, entity.barber_id);
        prop_assert_eq!(&dto.client_name, &entity.client_name);
        prop_assert_eq!(dto.appointment_date_time, entity.appointment_date_time);
        prop_assert_eq!(dto.status, entity.status);
        prop_assert_eq!(dto.available, entity.available);
    }

    #[test]
    fn to_dto_is_referentially_transparent(
        id in 1i64..1_000_000,
        seconds in 0i64..2_000_000_000,
        status_index in 0usize..4,
    ) {
        let entity = ServiceAppointment {
            id,
            service_id: 1,
            barber_id: 1,
            client_name: "John Doe".to_string(),
            appointment_date_time: datetime_from_seconds(seconds),
            status: status_from_index(status_index),
            available: true,
        };

        let service = make_service();
        // Equivalent inputs produce equal outputs, across service instances
        prop_assert_eq!(service.to_dto(&entity), service.to_dto(&entity.clone()));
        prop_assert_eq!(service.to_dto(&entity), make_service().to_dto(&entity));
    }
}
