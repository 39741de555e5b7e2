use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const DEFAULT_CITY: &str = "London";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    pub feels_like: i32,
    pub humidity: i32,
}

impl WeatherReport {
    /// Фиксированный ответ для mock-режима, город возвращается как есть
    pub fn mock(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: 15,
            condition: "partly cloudy".to_string(),
            feels_like: 13,
            humidity: 65,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    name: String,
    main: OpenWeatherMain,
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
    feels_like: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

/// Клиент OpenWeatherMap (current weather, метрическая система)
pub struct OpenWeatherClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn current(&self, city: &str) -> Result<WeatherReport> {
        let response = self
            .http_client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[("q", city), ("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .context("OpenWeatherMap request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenWeatherMap API error: {} - {}", status, text));
        }

        let body: OpenWeatherResponse = response
            .json()
            .await
            .context("OpenWeatherMap returned a malformed body")?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| anyhow!("OpenWeatherMap response has no weather entries"))?;

        Ok(WeatherReport {
            city: body.name,
            temperature: round_half_up(body.main.temp),
            condition,
            feels_like: round_half_up(body.main.feels_like),
            humidity: body.main.humidity,
        })
    }
}

/// Сервис для получения информации о погоде.
/// Режим (mock или OpenWeatherMap) выбирается один раз по наличию ключа.
pub enum WeatherService {
    Mock,
    Remote(OpenWeatherClient),
}

impl WeatherService {
    pub fn from_config(config: &Config) -> Self {
        match &config.openweather_api_key {
            Some(key) => Self::Remote(OpenWeatherClient::new(
                key.clone(),
                config.openweather_base_url.clone(),
            )),
            None => Self::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    /// Получает информацию о погоде для города
    pub async fn get_weather(&self, city: &str) -> Result<WeatherReport> {
        match self {
            Self::Mock => Ok(WeatherReport::mock(city)),
            Self::Remote(client) => client.current(city).await,
        }
    }
}

/// Округление до ближайшего целого, половина всегда вверх (-2.5 -> -2)
fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    // value - floor считается точно, в отличие от value + 0.5
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
