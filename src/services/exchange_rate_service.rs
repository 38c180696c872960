use crate::errors::AppError;
use crate::models::{ExchangeRate, ExchangeRatePayload};
use crate::store::ExchangeRateStore;

pub async fn create(
    store: &dyn ExchangeRateStore,
    input: ExchangeRatePayload,
) -> Result<ExchangeRate, AppError> {
    let new_pair = input.validate()?;
    store.insert_pair(new_pair).await
}

pub async fn update(
    store: &dyn ExchangeRateStore,
    id: i64,
    input: ExchangeRatePayload,
) -> Result<ExchangeRate, AppError> {
    // An unknown id is a 404 even when the body is also invalid.
    fetch_one(store, id).await?;
    let new_pair = input.validate()?;
    store
        .update_pair(id, new_pair)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn fetch_all(store: &dyn ExchangeRateStore) -> Result<Vec<ExchangeRate>, AppError> {
    store.list_pairs().await
}

pub async fn fetch_one(store: &dyn ExchangeRateStore, id: i64) -> Result<ExchangeRate, AppError> {
    store.find_pair(id).await?.ok_or_else(|| not_found(id))
}

pub async fn delete(store: &dyn ExchangeRateStore, id: i64) -> Result<(), AppError> {
    match store.delete_pair(id).await? {
        0 => Err(not_found(id)),
        _ => Ok(()),
    }
}

/// Resolves a pair by its codes, the way observation endpoints address pairs.
pub async fn fetch_by_codes(
    store: &dyn ExchangeRateStore,
    from_code: &str,
    to_code: &str,
) -> Result<ExchangeRate, AppError> {
    store
        .find_pair_by_codes(from_code, to_code)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Exchange rate {} -> {} not found", from_code, to_code))
        })
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Exchange rate {} not found", id))
}
