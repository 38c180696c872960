use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ExchangeRate, ExchangeRatePayload};
use crate::services::exchange_rate_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/exchange-rates/",
            get(fetch_exchange_rates).post(create_exchange_rate),
        )
        .route(
            "/exchange-rates/:id/",
            get(get_exchange_rate)
                .put(update_exchange_rate)
                .delete(delete_exchange_rate),
        )
}

pub async fn fetch_exchange_rates(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExchangeRate>>, AppError> {
    info!("GET /exchange-rates/ - Fetching all exchange rates");
    let pairs = exchange_rate_service::fetch_all(state.store.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to fetch exchange rates: {}", e);
            e
        })?;
    Ok(Json(pairs))
}

#[axum::debug_handler]
pub async fn create_exchange_rate(
    State(state): State<AppState>,
    payload: Result<Json<ExchangeRatePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ExchangeRate>), AppError> {
    info!("POST /exchange-rates/ - Creating exchange rate");
    let Json(data) = payload?;
    let pair = exchange_rate_service::create(state.store.as_ref(), data)
        .await
        .map_err(|e| {
            error!("Failed to create exchange rate: {}", e);
            e
        })?;
    info!("Created exchange rate {} ({} -> {})", pair.id, pair.from_code, pair.to_code);
    Ok((StatusCode::CREATED, Json(pair)))
}

pub async fn get_exchange_rate(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ExchangeRate>, AppError> {
    let Path(id) = id?;
    info!("GET /exchange-rates/{}/ - Fetching exchange rate", id);
    let pair = exchange_rate_service::fetch_one(state.store.as_ref(), id)
        .await
        .map_err(|e| {
            error!("Failed to fetch exchange rate {}: {}", id, e);
            e
        })?;
    Ok(Json(pair))
}

pub async fn update_exchange_rate(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ExchangeRatePayload>, JsonRejection>,
) -> Result<Json<ExchangeRate>, AppError> {
    let Path(id) = id?;
    info!("PUT /exchange-rates/{}/ - Updating exchange rate", id);
    let Json(data) = payload?;
    let pair = exchange_rate_service::update(state.store.as_ref(), id, data)
        .await
        .map_err(|e| {
            error!("Failed to update exchange rate {}: {}", id, e);
            e
        })?;
    Ok(Json(pair))
}

pub async fn delete_exchange_rate(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    info!("DELETE /exchange-rates/{}/ - Deleting exchange rate", id);
    exchange_rate_service::delete(state.store.as_ref(), id)
        .await
        .map_err(|e| {
            error!("Failed to delete exchange rate {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
