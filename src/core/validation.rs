//! Explicit field validation.
//!
//! Validators collect every violation instead of stopping at the first, so
//! a client gets the complete picture in one round trip. `Violations::into_result`
//! folds the outcome into the application error type.

use rust_decimal::Decimal;

use super::error::{AppError, Result};

/// Accumulates validation failures for a single payload.
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Ok when nothing was collected, otherwise a Validation error joining
    /// every message.
    pub fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.messages.join("; ")))
        }
    }

    /// Require a non-blank string field.
    pub fn require_not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(format!("{} is required", field));
        }
    }

    /// Require a positive identifier reference.
    pub fn require_positive_id(&mut self, field: &str, value: i64) {
        if value <= 0 {
            self.add(format!("{} must be a positive identifier", field));
        }
    }

    /// Require a non-negative decimal amount.
    pub fn require_non_negative(&mut self, field: &str, value: Decimal) {
        if value < Decimal::ZERO {
            self.add(format!("{} must be zero or positive", field));
        }
    }

    /// Require a decimal within an inclusive range.
    pub fn require_in_range(&mut self, field: &str, value: Decimal, min: Decimal, max: Decimal) {
        if value < min || value > max {
            self.add(format!("{} must be between {} and {}", field, min, max));
        }
    }

    /// Require an exact character count (digits for documents like CPF).
    pub fn require_exact_len(&mut self, field: &str, value: &str, len: usize) {
        if value.chars().count() != len {
            self.add(format!("{} must have {} characters", field, len));
        }
    }

    /// Minimal well-formedness check for an e-mail address: one `@` with
    /// non-empty local part and a dotted domain.
    pub fn require_email(&mut self, field: &str, value: &str) {
        let mut parts = value.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let domain = parts.next().unwrap_or("");
        let well_formed = !local.is_empty()
            && !domain.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.');
        if !well_formed {
            self.add(format!("{} must be a valid e-mail address", field));
        }
    }
}
