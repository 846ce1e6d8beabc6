mod appointment;

pub use appointment::{
    AppointmentStatus, CreateAppointmentRequest, ServiceAppointment, ServiceAppointmentDto,
    UpdateAppointmentRequest,
};
