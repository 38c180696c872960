use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::{daily_exchange_rate_queries, exchange_rate_queries};
use crate::errors::AppError;
use crate::models::{DailyExchangeRate, ExchangeRate, NewDailyExchangeRate, NewExchangeRate};
use crate::store::ExchangeRateStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl ExchangeRateStore for PgStore {
    async fn list_pairs(&self) -> Result<Vec<ExchangeRate>, AppError> {
        Ok(exchange_rate_queries::fetch_all(&self.pool).await?)
    }

    async fn find_pair(&self, id: i64) -> Result<Option<ExchangeRate>, AppError> {
        Ok(exchange_rate_queries::fetch_one(&self.pool, id).await?)
    }

    async fn find_pair_by_codes(
        &self,
        from_code: &str,
        to_code: &str,
    ) -> Result<Option<ExchangeRate>, AppError> {
        Ok(exchange_rate_queries::fetch_by_codes(&self.pool, from_code, to_code).await?)
    }

    async fn insert_pair(&self, input: NewExchangeRate) -> Result<ExchangeRate, AppError> {
        Ok(exchange_rate_queries::insert(&self.pool, input).await?)
    }

    async fn update_pair(
        &self,
        id: i64,
        input: NewExchangeRate,
    ) -> Result<Option<ExchangeRate>, AppError> {
        Ok(exchange_rate_queries::update(&self.pool, id, input).await?)
    }

    async fn delete_pair(&self, id: i64) -> Result<u64, AppError> {
        Ok(exchange_rate_queries::delete(&self.pool, id).await?)
    }

    async fn insert_observation(
        &self,
        input: NewDailyExchangeRate,
    ) -> Result<DailyExchangeRate, AppError> {
        Ok(daily_exchange_rate_queries::insert(&self.pool, input).await?)
    }

    async fn observations_between(
        &self,
        exchange_rate_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyExchangeRate>, AppError> {
        Ok(daily_exchange_rate_queries::fetch_between(&self.pool, exchange_rate_id, start, end).await?)
    }

    async fn latest_observations(
        &self,
        exchange_rate_id: i64,
        limit: usize,
    ) -> Result<Vec<DailyExchangeRate>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(daily_exchange_rate_queries::fetch_latest(&self.pool, exchange_rate_id, limit).await?)
    }
}
