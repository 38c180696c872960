use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{DailyExchangeRate, DailyRateEntry, ExchangeRate, ExchangeRateDetail, Stat};
use crate::store::ExchangeRateStore;

/// Trailing window length for the list view, and the minimum number of
/// observations the window must hold.
pub const WINDOW_DAYS: u32 = 7;

/// Number of most recent observations shown in the detail view.
pub const DETAIL_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSummary {
    pub average: Stat,
    pub latest_rate: Stat,
}

impl WindowSummary {
    pub fn insufficient() -> Self {
        Self {
            average: Stat::InsufficientData,
            latest_rate: Stat::InsufficientData,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailSummary {
    pub average: Stat,
    /// `max(rate) - min(rate)`.
    pub range: Stat,
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(rates: &[f64]) -> Option<f64> {
    if rates.is_empty() {
        return None;
    }
    Some(rates.iter().sum::<f64>() / rates.len() as f64)
}

/// `max - min`; `None` for an empty slice.
pub fn spread(rates: &[f64]) -> Option<f64> {
    let (min, max) = rates.iter().fold(None, |acc: Option<(f64, f64)>, &r| match acc {
        None => Some((r, r)),
        Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
    })?;
    Some(max - min)
}

/// First day of the inclusive window `[reference - window_days, reference]`.
pub fn window_start(reference: NaiveDate, window_days: u32) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Summarizes observations already restricted to one window.
///
/// Fewer than `window_days` rows is not an error: both fields come back as
/// [`Stat::InsufficientData`].
pub fn window_summary(observations: &[DailyExchangeRate], window_days: u32) -> WindowSummary {
    if observations.len() < window_days as usize {
        return WindowSummary::insufficient();
    }

    let rates: Vec<f64> = observations.iter().map(|o| o.rate).collect();
    let latest = observations.iter().max_by_key(|o| o.date).map(|o| o.rate);

    WindowSummary {
        average: mean(&rates).into(),
        latest_rate: latest.into(),
    }
}

pub fn detail_summary(observations: &[DailyExchangeRate]) -> DetailSummary {
    let rates: Vec<f64> = observations.iter().map(|o| o.rate).collect();
    DetailSummary {
        average: mean(&rates).into(),
        range: spread(&rates).into(),
    }
}

/// Average and latest rate over the trailing window ending at `reference_date`.
///
/// The caller resolves `pair`; a missing pair never reaches this function.
pub async fn summarize_window(
    store: &dyn ExchangeRateStore,
    pair: &ExchangeRate,
    reference_date: NaiveDate,
    window_days: u32,
) -> Result<WindowSummary, AppError> {
    let start = window_start(reference_date, window_days);
    let observations = store
        .observations_between(pair.id, start, reference_date)
        .await?;

    debug!(
        "Window {}..={} for {} -> {}: {} observations",
        start,
        reference_date,
        pair.from_code,
        pair.to_code,
        observations.len()
    );

    Ok(window_summary(&observations, window_days))
}

/// The `most_recent_n` latest observations of `pair` regardless of gaps,
/// with their average and range.
pub async fn summarize_detail(
    store: &dyn ExchangeRateStore,
    pair: &ExchangeRate,
    most_recent_n: usize,
) -> Result<ExchangeRateDetail, AppError> {
    let observations = store.latest_observations(pair.id, most_recent_n).await?;
    let summary = detail_summary(&observations);

    debug!(
        "Detail for {} -> {}: {} observations",
        pair.from_code,
        pair.to_code,
        observations.len()
    );

    Ok(ExchangeRateDetail {
        exchange_rate: pair.clone(),
        daily_exchange_rate: observations.into_iter().map(DailyRateEntry::from).collect(),
        range: summary.range,
        average: summary.average,
    })
}
