use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{DailyExchangeRate, NewDailyExchangeRate};

pub async fn insert(
    pool: &PgPool,
    input: NewDailyExchangeRate,
) -> Result<DailyExchangeRate, sqlx::Error> {
    sqlx::query_as::<_, DailyExchangeRate>(
        "INSERT INTO daily_exchange_rates (exchange_rate_id, rate, date)
         VALUES ($1, $2, $3)
         RETURNING id, exchange_rate_id, rate, date",
    )
    .bind(input.exchange_rate_id)
    .bind(input.rate)
    .bind(input.date)
    .fetch_one(pool)
    .await
}

/// Rows with `start <= date <= end`, newest first.
pub async fn fetch_between(
    pool: &PgPool,
    exchange_rate_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, DailyExchangeRate>(
        "SELECT id, exchange_rate_id, rate, date
         FROM daily_exchange_rates
         WHERE exchange_rate_id = $1
           AND date BETWEEN $2 AND $3
         ORDER BY date DESC",
    )
    .bind(exchange_rate_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

pub async fn fetch_latest(
    pool: &PgPool,
    exchange_rate_id: i64,
    limit: i64,
) -> Result<Vec<DailyExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, DailyExchangeRate>(
        "SELECT id, exchange_rate_id, rate, date
         FROM daily_exchange_rates
         WHERE exchange_rate_id = $1
         ORDER BY date DESC
         LIMIT $2",
    )
    .bind(exchange_rate_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
