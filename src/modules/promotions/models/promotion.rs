use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, Violations};

/// A time-bound promotional discount on a service category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Discount percentage, 0 to 100
    pub discount: Decimal,
    pub category: String,
    pub available_until: NaiveDate,
    pub active: bool,
}

/// Payload for creating or amending a promotion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub name: String,
    pub description: String,
    pub discount: Decimal,
    pub category: String,
    pub available_until: NaiveDate,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl PromotionRequest {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations.require_not_blank("name", &self.name);
        violations.require_not_blank("description", &self.description);
        violations.require_not_blank("category", &self.category);
        violations.require_in_range("discount", self.discount, Decimal::ZERO, Decimal::from(100));
        violations.into_result()
    }

    pub fn into_promotion(self, id: i64) -> Promotion {
        Promotion {
            id,
            name: self.name,
            description: self.description,
            discount: self.discount,
            category: self.category,
            available_until: self.available_until,
            active: self.active,
        }
    }
}
