use sqlx::PgPool;

use crate::models::{ExchangeRate, NewExchangeRate};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<ExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, ExchangeRate>(
        "SELECT id, from_code, to_code
         FROM exchange_rates
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: i64) -> Result<Option<ExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, ExchangeRate>(
        "SELECT id, from_code, to_code
         FROM exchange_rates
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_by_codes(
    pool: &PgPool,
    from_code: &str,
    to_code: &str,
) -> Result<Option<ExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, ExchangeRate>(
        "SELECT id, from_code, to_code
         FROM exchange_rates
         WHERE from_code = $1 AND to_code = $2",
    )
    .bind(from_code)
    .bind(to_code)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: NewExchangeRate) -> Result<ExchangeRate, sqlx::Error> {
    sqlx::query_as::<_, ExchangeRate>(
        "INSERT INTO exchange_rates (from_code, to_code)
         VALUES ($1, $2)
         RETURNING id, from_code, to_code",
    )
    .bind(input.from_code)
    .bind(input.to_code)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    input: NewExchangeRate,
) -> Result<Option<ExchangeRate>, sqlx::Error> {
    sqlx::query_as::<_, ExchangeRate>(
        "UPDATE exchange_rates
         SET from_code = $1, to_code = $2
         WHERE id = $3
         RETURNING id, from_code, to_code",
    )
    .bind(input.from_code)
    .bind(input.to_code)
    .bind(id)
    .fetch_optional(pool)
    .await
}

// daily_exchange_rates rows go with it via ON DELETE CASCADE.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM exchange_rates WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
