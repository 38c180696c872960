mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::{DailyExchangeRate, ExchangeRate, NewDailyExchangeRate, NewExchangeRate};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence for exchange rate pairs and their daily observations.
///
/// Implementations enforce both uniqueness rules at write time and report a
/// violation as [`AppError::Conflict`]. Deleting a pair removes its
/// observations.
#[async_trait]
pub trait ExchangeRateStore: Send + Sync {
    /// All pairs, ordered by id ascending.
    async fn list_pairs(&self) -> Result<Vec<ExchangeRate>, AppError>;

    async fn find_pair(&self, id: i64) -> Result<Option<ExchangeRate>, AppError>;

    async fn find_pair_by_codes(
        &self,
        from_code: &str,
        to_code: &str,
    ) -> Result<Option<ExchangeRate>, AppError>;

    async fn insert_pair(&self, input: NewExchangeRate) -> Result<ExchangeRate, AppError>;

    /// Returns `None` when no pair has this id.
    async fn update_pair(
        &self,
        id: i64,
        input: NewExchangeRate,
    ) -> Result<Option<ExchangeRate>, AppError>;

    /// Number of pairs removed (0 or 1).
    async fn delete_pair(&self, id: i64) -> Result<u64, AppError>;

    async fn insert_observation(
        &self,
        input: NewDailyExchangeRate,
    ) -> Result<DailyExchangeRate, AppError>;

    /// Observations dated within `[start, end]`, newest first.
    async fn observations_between(
        &self,
        exchange_rate_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyExchangeRate>, AppError>;

    /// The `limit` most recent observations, newest first.
    async fn latest_observations(
        &self,
        exchange_rate_id: i64,
        limit: usize,
    ) -> Result<Vec<DailyExchangeRate>, AppError>;
}
