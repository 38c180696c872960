pub mod exchange_rates;
pub mod daily_exchange_rates;
pub mod health;
