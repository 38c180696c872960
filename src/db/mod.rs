pub mod exchange_rate_queries;
pub mod daily_exchange_rate_queries;
