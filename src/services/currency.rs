use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::Config;

pub const BASE_CURRENCY: &str = "INR";
pub const DEFAULT_AMOUNT: f64 = 100.0;

/// Фиксированные курсы INR для mock-режима
pub const MOCK_RATES: Rates = Rates {
    usd: 0.012,
    eur: 0.011,
};

#[derive(Debug, Error, PartialEq)]
#[error("Amount must be greater than 0")]
pub struct InvalidAmount;

/// Сумма в INR: конечное число строго больше нуля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, InvalidAmount> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(InvalidAmount)
        }
    }

    /// Разбирает параметр запроса; пустой или отсутствующий означает 100
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidAmount> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::new(DEFAULT_AMOUNT),
            Some(s) => s.parse::<f64>().map_err(|_| InvalidAmount).and_then(Self::new),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub usd: f64,
    pub eur: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub usd: String,
    pub eur: String,
    #[serde(serialize_with = "serialize_number")]
    pub amount: f64,
}

impl ConversionResult {
    pub fn convert(amount: Amount, rates: Rates) -> Self {
        let amount = amount.value();
        Self {
            usd: to_fixed_2(amount * rates.usd),
            eur: to_fixed_2(amount * rates.eur),
            amount,
        }
    }
}

/// Ровно два знака после точки по точному двоичному значению.
/// `{:.2}` округляет точную половину к четному, а нужно от нуля (0.125 -> 0.13).
pub fn to_fixed_2(value: f64) -> String {
    // Точная половина сотой бывает только у кратных 1/8: умножения на 8 и 100 тут без потерь
    let cents = value * 100.0;
    if (value * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        format!("{:.2}", cents.round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Целые суммы пишем как JSON-целое (100, а не 100.0)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    conversion_rates: HashMap<String, f64>,
}

/// Клиент ExchangeRate-API (v6, latest)
pub struct ExchangeRateClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Получает курсы USD и EUR к INR
    pub async fn latest_rates(&self) -> Result<Rates> {
        let url = format!(
            "{}/v6/{}/latest/{}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            BASE_CURRENCY
        );

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .context("ExchangeRate-API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("ExchangeRate-API error: {} - {}", status, text));
        }

        let body: ExchangeRateResponse = response
            .json()
            .await
            .context("ExchangeRate-API returned a malformed body")?;

        let rate = |code: &str| {
            body.conversion_rates
                .get(code)
                .copied()
                .ok_or_else(|| anyhow!("ExchangeRate-API response has no {} rate", code))
        };

        Ok(Rates {
            usd: rate("USD")?,
            eur: rate("EUR")?,
        })
    }
}

/// Сервис для конвертации INR в USD и EUR.
/// Режим (mock или ExchangeRate-API) выбирается один раз по наличию ключа.
pub enum CurrencyService {
    Mock,
    Remote(ExchangeRateClient),
}

impl CurrencyService {
    pub fn from_config(config: &Config) -> Self {
        match &config.exchange_rate_api_key {
            Some(key) => Self::Remote(ExchangeRateClient::new(
                key.clone(),
                config.exchange_rate_base_url.clone(),
            )),
            None => Self::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }

    pub async fn convert(&self, amount: Amount) -> Result<ConversionResult> {
        let rates = match self {
            Self::Mock => MOCK_RATES,
            Self::Remote(client) => client.latest_rates().await?,
        };
        Ok(ConversionResult::convert(amount, rates))
    }
}
