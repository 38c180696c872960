pub mod exchange_rate_service;
pub mod daily_exchange_rate_service;
pub mod rolling_stats;
