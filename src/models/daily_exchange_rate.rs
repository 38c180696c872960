use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{ExchangeRate, Stat};

// One recorded rate for a pair on a given day. Unique on (exchange_rate_id, date).
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DailyExchangeRate {
    pub id: i64,
    pub exchange_rate_id: i64,
    pub rate: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyExchangeRate {
    pub exchange_rate_id: i64,
    pub rate: f64,
    pub date: NaiveDate,
}

/// Request body for `POST /daily-exchange-rates/`. The pair is referenced by
/// its codes and resolved to an id before insert.
#[derive(Debug, Default, Deserialize)]
pub struct CreateDailyExchangeRate {
    pub from_code: Option<String>,
    pub to_code: Option<String>,
    pub rate: Option<f64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DailyExchangeRateCreated {
    pub id: i64,
    pub from_code: String,
    pub to_code: String,
    pub rate: f64,
    pub date: NaiveDate,
}

impl DailyExchangeRateCreated {
    pub fn new(pair: &ExchangeRate, observation: DailyExchangeRate) -> Self {
        Self {
            id: observation.id,
            from_code: pair.from_code.clone(),
            to_code: pair.to_code.clone(),
            rate: observation.rate,
            date: observation.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRateEntry {
    pub id: i64,
    pub rate: f64,
    pub date: NaiveDate,
}

impl From<DailyExchangeRate> for DailyRateEntry {
    fn from(value: DailyExchangeRate) -> Self {
        Self {
            id: value.id,
            rate: value.rate,
            date: value.date,
        }
    }
}

/// Single pair view: the latest observations plus their mean and spread.
///
/// `range` is `max(rate) - min(rate)`. It goes out on the wire as `variance`
/// because existing clients read that key; it is not a statistical variance.
#[derive(Debug, Serialize)]
pub struct ExchangeRateDetail {
    pub exchange_rate: ExchangeRate,
    pub daily_exchange_rate: Vec<DailyRateEntry>,
    #[serde(rename = "variance")]
    pub range: Stat,
    pub average: Stat,
}

/// One row of `GET /daily-exchange-rates/list`.
#[derive(Debug, Serialize)]
pub struct ExchangeRateWindowRow {
    pub id: i64,
    pub from_code: String,
    pub to_code: String,
    pub average: Stat,
    pub rate: Stat,
}

#[derive(Debug, Default, Deserialize)]
pub struct PairQuery {
    pub from_code: Option<String>,
    pub to_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    /// Reference date (YYYY-MM-DD); today when absent.
    pub date: Option<NaiveDate>,
}
