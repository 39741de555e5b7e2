use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_EXCHANGE_RATE_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Конфигурация процесса. Читается один раз при старте и дальше не меняется.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openweather_api_key: Option<String>,
    pub exchange_rate_api_key: Option<String>,
    pub openweather_base_url: String,
    pub exchange_rate_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let openweather_api_key = credential(env::var("OPENWEATHER_API_KEY").ok());
        let exchange_rate_api_key = credential(env::var("EXCHANGE_RATE_API_KEY").ok());

        let openweather_base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENWEATHER_BASE_URL.to_string());
        let exchange_rate_base_url = env::var("EXCHANGE_RATE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EXCHANGE_RATE_BASE_URL.to_string());

        Self {
            port,
            openweather_api_key,
            exchange_rate_api_key,
            openweather_base_url,
            exchange_rate_base_url,
        }
    }
}

impl Config {
    /// Конфигурация без ключей: оба провайдера работают в mock-режиме
    pub fn offline() -> Self {
        Self {
            port: DEFAULT_PORT,
            openweather_api_key: None,
            exchange_rate_api_key: None,
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
            exchange_rate_base_url: DEFAULT_EXCHANGE_RATE_BASE_URL.to_string(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Пустой ключ считаем отсутствующим
fn credential(value: Option<String>) -> Option<String> {
    value.and_then(|key| {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_select_mock_mode() {
        assert_eq!(credential(None), None);
        assert_eq!(credential(Some(String::new())), None);
        assert_eq!(credential(Some("   ".to_string())), None);
        assert_eq!(credential(Some(" abc ".to_string())), Some("abc".to_string()));
    }

    #[test]
    fn offline_config_has_no_credentials() {
        let config = Config::offline();
        assert!(config.openweather_api_key.is_none());
        assert!(config.exchange_rate_api_key.is_none());
        assert_eq!(config.bind_addr().port(), DEFAULT_PORT);
    }
}
