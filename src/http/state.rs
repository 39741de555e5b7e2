use crate::config::Config;
use crate::services::{CurrencyService, QuoteService, WeatherService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
    pub weather: Arc<WeatherService>,
    pub currency: Arc<CurrencyService>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            quotes: Arc::new(QuoteService::new()),
            weather: Arc::new(WeatherService::from_config(config)),
            currency: Arc::new(CurrencyService::from_config(config)),
        }
    }
}
