use std::sync::Arc;

use crate::clock::Clock;
use crate::store::ExchangeRateStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExchangeRateStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn ExchangeRateStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
