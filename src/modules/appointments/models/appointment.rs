// Service appointment entity, status lifecycle and transfer representation.
//
// The DTO flattens the barber/service references to plain identifiers so the
// transport boundary never exposes entity relationships directly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, Violations};

/// Appointment status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Requested by the client, not yet confirmed by the shop
    #[serde(rename = "PENDENTE")]
    Pendente,

    /// Confirmed by the barber
    #[serde(rename = "CONFIRMADO")]
    Confirmado,

    /// Service was performed
    #[serde(rename = "CONCLUIDO")]
    Concluido,

    /// Cancelled by either side
    #[serde(rename = "CANCELADO")]
    Cancelado,
}

impl AppointmentStatus {
    /// Every member of the closed set, in lifecycle order.
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pendente,
        AppointmentStatus::Confirmado,
        AppointmentStatus::Concluido,
        AppointmentStatus::Cancelado,
    ];
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        AppointmentStatus::Pendente
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pendente => write!(f, "PENDENTE"),
            AppointmentStatus::Confirmado => write!(f, "CONFIRMADO"),
            AppointmentStatus::Concluido => write!(f, "CONCLUIDO"),
            AppointmentStatus::Cancelado => write!(f, "CANCELADO"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(AppointmentStatus::Pendente),
            "CONFIRMADO" => Ok(AppointmentStatus::Confirmado),
            "CONCLUIDO" => Ok(AppointmentStatus::Concluido),
            "CANCELADO" => Ok(AppointmentStatus::Cancelado),
            _ => Err(format!("Invalid appointment status: {}", s)),
        }
    }
}

/// A scheduled service appointment row.
///
/// `service_id` and `barber_id` reference rows owned elsewhere; deleting an
/// appointment never touches them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceAppointment {
    /// Assigned by the store on insert, immutable afterwards
    pub id: i64,
    pub service_id: i64,
    pub barber_id: i64,
    pub client_name: String,
    pub appointment_date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    /// Whether the slot is still bookable
    pub available: bool,
}

/// Transfer representation exposed at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAppointmentDto {
    pub id: i64,
    pub service_id: i64,
    pub barber_id: i64,
    pub client_name: String,
    pub appointment_date_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub available: bool,
}

/// Payload for creating an appointment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub service_id: i64,
    pub barber_id: i64,
    pub client_name: String,
    pub appointment_date_time: NaiveDateTime,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations.require_not_blank("clientName", &self.client_name);
        violations.require_positive_id("serviceId", self.service_id);
        violations.require_positive_id("barberId", self.barber_id);
        if !self.available {
            // A slot that never existed cannot already be taken
            violations.add("a new appointment slot must be created as available");
        }
        violations.into_result()
    }
}

/// Payload for a partial appointment update. Absent fields keep their value.
/// Status assignment is unrestricted: the domain defines no transition table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub service_id: Option<i64>,
    pub barber_id: Option<i64>,
    pub client_name: Option<String>,
    pub appointment_date_time: Option<NaiveDateTime>,
    pub status: Option<AppointmentStatus>,
    pub available: Option<bool>,
}

impl UpdateAppointmentRequest {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        if let Some(name) = &self.client_name {
            violations.require_not_blank("clientName", name);
        }
        if let Some(service_id) = self.service_id {
            violations.require_positive_id("serviceId", service_id);
        }
        if let Some(barber_id) = self.barber_id {
            violations.require_positive_id("barberId", barber_id);
        }
        violations.into_result()
    }
}
