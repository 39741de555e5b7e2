use crate::http::errors::{CURRENCY_FAILURE, QUOTE_FAILURE, WEATHER_FAILURE};
use crate::http::{ApiError, AppState};
use crate::services::currency::ConversionResult;
use crate::services::quotes::Quote;
use crate::services::weather::{WeatherReport, DEFAULT_CITY};
use crate::services::{Amount, HealthStatus};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/quote", get(quote_handler))
        .route("/api/weather", get(weather_handler))
        .route("/api/currency", get(currency_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Параметры запроса как пары: повторный ключ не ошибка, берется первое значение
type QueryPairs = Query<Vec<(String, String)>>;

fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

async fn quote_handler(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    match state.quotes.random_quote() {
        Some(quote) => Ok(Json(quote.clone())),
        None => {
            log::error!("❌ Quote API: список цитат пуст");
            Err(ApiError::Internal(QUOTE_FAILURE))
        }
    }
}

async fn weather_handler(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = first_param(&params, "city")
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CITY);

    state.weather.get_weather(city).await.map(Json).map_err(|e| {
        log::error!("❌ Weather API Error ({}): {:#}", city, e);
        ApiError::Upstream(WEATHER_FAILURE)
    })
}

async fn currency_handler(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<ConversionResult>, ApiError> {
    // Валидация до любого обращения к провайдеру
    let amount = Amount::parse(first_param(&params, "amount"))?;

    state.currency.convert(amount).await.map(Json).map_err(|e| {
        log::error!("❌ Currency API Error: {:#}", e);
        ApiError::Upstream(CURRENCY_FAILURE)
    })
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}
