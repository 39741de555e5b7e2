// Модули приложения
mod config;
mod http;
mod logger;
mod services;

#[cfg(test)]
mod testing;

use config::Config;
use http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env нужен до логгера, чтобы RUST_LOG и LOG_FILE из него учитывались
    dotenv::dotenv().ok();

    // Инициализируем логирование
    logger::init();
    log::info!("🚀 Infohub запускается");

    let config = Config::default();
    log::info!("📁 Конфигурация загружена");

    let state = AppState::from_config(&config);
    log::info!("📚 Цитат в списке: {}", state.quotes.all().len());
    log::info!(
        "🌦️ Погода: {}",
        if state.weather.is_mock() { "mock-данные" } else { "OpenWeatherMap" }
    );
    log::info!(
        "💱 Валюты: {}",
        if state.currency.is_mock() { "mock-курсы" } else { "ExchangeRate-API" }
    );

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("✅ Сервер слушает порт {}", config.port);
    log::info!("📋 Endpoints:");
    log::info!("   GET /api/quote");
    log::info!("   GET /api/weather?city=");
    log::info!("   GET /api/currency?amount=");
    log::info!("   GET /api/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("🛑 Получен сигнал остановки"),
        Err(e) => {
            // Без обработчика сигнала работаем до внешнего завершения процесса
            log::error!("❌ Не удалось установить обработчик Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
