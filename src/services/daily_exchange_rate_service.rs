use chrono::NaiveDate;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{
    required_code, CreateDailyExchangeRate, DailyExchangeRateCreated, ExchangeRateDetail,
    ExchangeRateWindowRow, NewDailyExchangeRate, PairQuery,
};
use crate::services::exchange_rate_service;
use crate::services::rolling_stats::{self, DETAIL_SIZE, WINDOW_DAYS};
use crate::store::ExchangeRateStore;

/// Records one day's rate for the pair named by `from_code`/`to_code`.
pub async fn create(
    store: &dyn ExchangeRateStore,
    input: CreateDailyExchangeRate,
) -> Result<DailyExchangeRateCreated, AppError> {
    let from_code = required_code("from_code", input.from_code)?;
    let to_code = required_code("to_code", input.to_code)?;
    let pair = exchange_rate_service::fetch_by_codes(store, &from_code, &to_code).await?;

    let rate = input
        .rate
        .ok_or_else(|| AppError::Validation("rate is required".to_string()))?;
    if !rate.is_finite() {
        return Err(AppError::Validation("rate must be a finite number".to_string()));
    }
    let date = input
        .date
        .ok_or_else(|| AppError::Validation("date is required".to_string()))?;

    let observation = store
        .insert_observation(NewDailyExchangeRate {
            exchange_rate_id: pair.id,
            rate,
            date,
        })
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => {
                warn!("Rate for {} -> {} on {} already recorded", from_code, to_code, date);
                AppError::Conflict(format!(
                    "A rate for {} -> {} on {} already exists",
                    from_code, to_code, date
                ))
            }
            other => other,
        })?;

    Ok(DailyExchangeRateCreated::new(&pair, observation))
}

/// Latest observations of one pair with their average and range.
pub async fn detail(
    store: &dyn ExchangeRateStore,
    query: PairQuery,
) -> Result<ExchangeRateDetail, AppError> {
    let from_code = required_code("from_code", query.from_code)?;
    let to_code = required_code("to_code", query.to_code)?;
    let pair = exchange_rate_service::fetch_by_codes(store, &from_code, &to_code).await?;
    rolling_stats::summarize_detail(store, &pair, DETAIL_SIZE).await
}

/// One trailing-window summary per pair, in pair id order.
pub async fn list_window(
    store: &dyn ExchangeRateStore,
    reference_date: NaiveDate,
) -> Result<Vec<ExchangeRateWindowRow>, AppError> {
    let pairs = store.list_pairs().await?;
    let mut rows = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let summary =
            rolling_stats::summarize_window(store, &pair, reference_date, WINDOW_DAYS).await?;
        rows.push(ExchangeRateWindowRow {
            id: pair.id,
            from_code: pair.from_code,
            to_code: pair.to_code,
            average: summary.average,
            rate: summary.latest_rate,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewExchangeRate, Stat};
    use crate::store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 7, d).unwrap()
    }

    fn input(from: &str, to: &str, rate: Option<f64>, date: Option<NaiveDate>) -> CreateDailyExchangeRate {
        CreateDailyExchangeRate {
            from_code: Some(from.to_string()),
            to_code: Some(to.to_string()),
            rate,
            date,
        }
    }

    async fn store_with_pair() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_pair(NewExchangeRate { from_code: "GBP".into(), to_code: "USD".into() })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_resolves_pair_by_codes() {
        let store = store_with_pair().await;
        let created = create(&store, input("GBP", "USD", Some(1.31), Some(day(2)))).await.unwrap();
        assert_eq!(created.from_code, "GBP");
        assert_eq!(created.to_code, "USD");
        assert_eq!(created.rate, 1.31);
        assert_eq!(created.date, day(2));
    }

    #[tokio::test]
    async fn test_create_for_unknown_pair_is_not_found() {
        let store = store_with_pair().await;
        let err = create(&store, input("USD", "GBP", Some(0.7), Some(day(2)))).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_requires_rate_and_date() {
        let store = store_with_pair().await;
        let err = create(&store, input("GBP", "USD", None, Some(day(2)))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("rate")));

        let err = create(&store, input("GBP", "USD", Some(1.0), None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("date")));
        assert_eq!(store.observation_count(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_non_finite_rate() {
        let store = store_with_pair().await;
        let err = create(&store, input("GBP", "USD", Some(f64::NAN), Some(day(2)))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_same_day_twice_is_conflict() {
        let store = store_with_pair().await;
        create(&store, input("GBP", "USD", Some(1.3), Some(day(2)))).await.unwrap();
        let err = create(&store, input("GBP", "USD", Some(1.4), Some(day(2)))).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.observation_count(), 1);
    }

    #[tokio::test]
    async fn test_detail_requires_both_codes() {
        let store = store_with_pair().await;
        let query = PairQuery { from_code: Some("GBP".into()), to_code: None };
        assert!(matches!(detail(&store, query).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_window_keeps_pair_order() {
        let store = store_with_pair().await;
        store
            .insert_pair(NewExchangeRate { from_code: "USD".into(), to_code: "GBP".into() })
            .await
            .unwrap();
        for d in 2..=8 {
            create(&store, input("USD", "GBP", Some(0.5), Some(day(d)))).await.unwrap();
        }

        let rows = list_window(&store, day(8)).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].from_code.as_str(), rows[0].to_code.as_str()), ("GBP", "USD"));
        assert!(rows[0].rate.is_insufficient());
        assert_eq!(rows[1].rate, Stat::Value(0.5));
        assert_eq!(rows[1].average, Stat::Value(0.5));
    }
}
