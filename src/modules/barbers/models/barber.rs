use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, Violations};

/// A barber employed by the shop.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Brazilian taxpayer id, exactly 11 digits
    pub cpf: String,
    pub salary: Decimal,
    pub address: String,
    pub admission_date: NaiveDate,
    /// Free-text attendance hours, e.g. "ter-sab 09:00-18:00"
    pub service_hours: String,
}

/// Payload for creating or replacing a barber.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub salary: Decimal,
    pub address: String,
    pub admission_date: NaiveDate,
    pub service_hours: String,
}

impl BarberRequest {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations.require_not_blank("name", &self.name);
        violations.require_not_blank("email", &self.email);
        violations.require_email("email", &self.email);
        violations.require_not_blank("phone", &self.phone);
        violations.require_not_blank("cpf", &self.cpf);
        violations.require_exact_len("cpf", &self.cpf, 11);
        violations.require_non_negative("salary", self.salary);
        violations.require_not_blank("address", &self.address);
        violations.require_not_blank("serviceHours", &self.service_hours);
        violations.into_result()
    }

    pub fn into_barber(self, id: i64) -> Barber {
        Barber {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            cpf: self.cpf,
            salary: self.salary,
            address: self.address,
            admission_date: self.admission_date,
            service_hours: self.service_hours,
        }
    }
}
