use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// Width of the code columns in `exchange_rates`.
pub const MAX_CODE_LEN: usize = 255;

// A directed conversion pair, e.g. GBP -> USD. Unique on (from_code, to_code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ExchangeRate {
    pub id: i64,
    pub from_code: String,
    pub to_code: String,
}

/// Validated codes ready to be written, used for both insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExchangeRate {
    pub from_code: String,
    pub to_code: String,
}

/// Request body for `POST /exchange-rates/` and `PUT /exchange-rates/{id}/`.
///
/// Fields are optional so that a missing field is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct ExchangeRatePayload {
    pub from_code: Option<String>,
    pub to_code: Option<String>,
}

impl ExchangeRatePayload {
    pub fn validate(self) -> Result<NewExchangeRate, AppError> {
        Ok(NewExchangeRate {
            from_code: required_code("from_code", self.from_code)?,
            to_code: required_code("to_code", self.to_code)?,
        })
    }
}

pub(crate) fn required_code(field: &str, value: Option<String>) -> Result<String, AppError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if value.chars().count() > MAX_CODE_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_CODE_LEN
        )));
    }
    Ok(value)
}
