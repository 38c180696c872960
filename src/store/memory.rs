use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::errors::AppError;
use crate::models::{DailyExchangeRate, ExchangeRate, NewDailyExchangeRate, NewExchangeRate};
use crate::store::ExchangeRateStore;

#[derive(Default)]
struct Tables {
    last_pair_id: i64,
    last_observation_id: i64,
    pairs: BTreeMap<i64, ExchangeRate>,
    observations: BTreeMap<i64, DailyExchangeRate>,
}

impl Tables {
    fn codes_taken(&self, input: &NewExchangeRate, except: Option<i64>) -> bool {
        self.pairs.values().any(|p| {
            Some(p.id) != except && p.from_code == input.from_code && p.to_code == input.to_code
        })
    }

    fn observations_for(&self, exchange_rate_id: i64) -> Vec<DailyExchangeRate> {
        let mut rows: Vec<DailyExchangeRate> = self
            .observations
            .values()
            .filter(|o| o.exchange_rate_id == exchange_rate_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }
}

/// In-process store. Each operation holds the lock for its whole duration,
/// so uniqueness checks and writes are atomic with respect to each other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair_count(&self) -> usize {
        self.tables.read().pairs.len()
    }

    pub fn observation_count(&self) -> usize {
        self.tables.read().observations.len()
    }
}

#[async_trait]
impl ExchangeRateStore for MemoryStore {
    async fn list_pairs(&self) -> Result<Vec<ExchangeRate>, AppError> {
        Ok(self.tables.read().pairs.values().cloned().collect())
    }

    async fn find_pair(&self, id: i64) -> Result<Option<ExchangeRate>, AppError> {
        Ok(self.tables.read().pairs.get(&id).cloned())
    }

    async fn find_pair_by_codes(
        &self,
        from_code: &str,
        to_code: &str,
    ) -> Result<Option<ExchangeRate>, AppError> {
        Ok(self
            .tables
            .read()
            .pairs
            .values()
            .find(|p| p.from_code == from_code && p.to_code == to_code)
            .cloned())
    }

    async fn insert_pair(&self, input: NewExchangeRate) -> Result<ExchangeRate, AppError> {
        let mut tables = self.tables.write();
        if tables.codes_taken(&input, None) {
            return Err(AppError::Conflict(format!(
                "Exchange rate {} -> {} already exists",
                input.from_code, input.to_code
            )));
        }
        tables.last_pair_id += 1;
        let pair = ExchangeRate {
            id: tables.last_pair_id,
            from_code: input.from_code,
            to_code: input.to_code,
        };
        tables.pairs.insert(pair.id, pair.clone());
        Ok(pair)
    }

    async fn update_pair(
        &self,
        id: i64,
        input: NewExchangeRate,
    ) -> Result<Option<ExchangeRate>, AppError> {
        let mut tables = self.tables.write();
        if !tables.pairs.contains_key(&id) {
            return Ok(None);
        }
        if tables.codes_taken(&input, Some(id)) {
            return Err(AppError::Conflict(format!(
                "Exchange rate {} -> {} already exists",
                input.from_code, input.to_code
            )));
        }
        let pair = ExchangeRate {
            id,
            from_code: input.from_code,
            to_code: input.to_code,
        };
        tables.pairs.insert(id, pair.clone());
        Ok(Some(pair))
    }

    async fn delete_pair(&self, id: i64) -> Result<u64, AppError> {
        let mut tables = self.tables.write();
        if tables.pairs.remove(&id).is_none() {
            return Ok(0);
        }
        tables.observations.retain(|_, o| o.exchange_rate_id != id);
        Ok(1)
    }

    async fn insert_observation(
        &self,
        input: NewDailyExchangeRate,
    ) -> Result<DailyExchangeRate, AppError> {
        let mut tables = self.tables.write();
        if !tables.pairs.contains_key(&input.exchange_rate_id) {
            return Err(AppError::NotFound("Exchange rate not found".to_string()));
        }
        let duplicate = tables
            .observations
            .values()
            .any(|o| o.exchange_rate_id == input.exchange_rate_id && o.date == input.date);
        if duplicate {
            return Err(AppError::Conflict(format!(
                "A rate for {} is already recorded",
                input.date
            )));
        }
        tables.last_observation_id += 1;
        let observation = DailyExchangeRate {
            id: tables.last_observation_id,
            exchange_rate_id: input.exchange_rate_id,
            rate: input.rate,
            date: input.date,
        };
        tables.observations.insert(observation.id, observation.clone());
        Ok(observation)
    }

    async fn observations_between(
        &self,
        exchange_rate_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyExchangeRate>, AppError> {
        let mut rows = self.tables.read().observations_for(exchange_rate_id);
        rows.retain(|o| o.date >= start && o.date <= end);
        Ok(rows)
    }

    async fn latest_observations(
        &self,
        exchange_rate_id: i64,
        limit: usize,
    ) -> Result<Vec<DailyExchangeRate>, AppError> {
        let mut rows = self.tables.read().observations_for(exchange_rate_id);
        rows.truncate(limit);
        Ok(rows)
    }
}
