use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    CreateDailyExchangeRate, DailyExchangeRateCreated, ExchangeRateDetail, ExchangeRateWindowRow,
    PairQuery, WindowQuery,
};
use crate::services::daily_exchange_rate_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/daily-exchange-rates/",
            get(get_exchange_rate_detail).post(create_daily_exchange_rate),
        )
        .route("/daily-exchange-rates/list", get(list_weekly_summaries))
}

/// Latest seven observations of one pair, with their average and spread.
///
/// # Example
/// ```text
/// GET /api/v1/daily-exchange-rates/?from_code=GBP&to_code=USD
/// ```
pub async fn get_exchange_rate_detail(
    State(state): State<AppState>,
    query: Result<Query<PairQuery>, QueryRejection>,
) -> Result<Json<ExchangeRateDetail>, AppError> {
    let Query(query) = query?;
    info!(
        "GET /daily-exchange-rates/ - Fetching detail for {:?} -> {:?}",
        query.from_code, query.to_code
    );
    let detail = daily_exchange_rate_service::detail(state.store.as_ref(), query)
        .await
        .map_err(|e| {
            error!("Failed to fetch exchange rate detail: {}", e);
            e
        })?;
    Ok(Json(detail))
}

#[axum::debug_handler]
pub async fn create_daily_exchange_rate(
    State(state): State<AppState>,
    payload: Result<Json<CreateDailyExchangeRate>, JsonRejection>,
) -> Result<(StatusCode, Json<DailyExchangeRateCreated>), AppError> {
    info!("POST /daily-exchange-rates/ - Recording daily exchange rate");
    let Json(data) = payload?;
    let created = daily_exchange_rate_service::create(state.store.as_ref(), data)
        .await
        .map_err(|e| {
            error!("Failed to record daily exchange rate: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Trailing-week average and latest rate for every pair.
///
/// `date` defaults to today. Pairs with fewer than seven observations in
/// the window report `"insufficient data"`.
///
/// # Example
/// ```text
/// GET /api/v1/daily-exchange-rates/list?date=2018-07-08
/// ```
pub async fn list_weekly_summaries(
    State(state): State<AppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<Vec<ExchangeRateWindowRow>>, AppError> {
    let Query(query) = query?;
    let reference_date = query.date.unwrap_or_else(|| state.clock.today());
    info!("GET /daily-exchange-rates/list - Summarizing week ending {}", reference_date);
    let rows = daily_exchange_rate_service::list_window(state.store.as_ref(), reference_date)
        .await
        .map_err(|e| {
            error!("Failed to summarize exchange rates for {}: {}", reference_date, e);
            e
        })?;
    Ok(Json(rows))
}
