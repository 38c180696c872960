mod exchange_rate;
mod daily_exchange_rate;
mod stat;

pub use exchange_rate::{ExchangeRate, ExchangeRatePayload, NewExchangeRate, MAX_CODE_LEN};
pub use daily_exchange_rate::{
    CreateDailyExchangeRate, DailyExchangeRate, DailyExchangeRateCreated, DailyRateEntry,
    ExchangeRateDetail, ExchangeRateWindowRow, NewDailyExchangeRate, PairQuery, WindowQuery,
};
pub use stat::{Stat, INSUFFICIENT_DATA};
pub(crate) use exchange_rate::required_code;
