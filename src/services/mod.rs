pub mod currency;
pub mod health;
pub mod quotes;
pub mod weather;

pub use currency::{Amount, CurrencyService, InvalidAmount};
pub use health::HealthStatus;
pub use quotes::QuoteService;
pub use weather::WeatherService;
