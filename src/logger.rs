/// Модуль для инициализации логирования
/// По умолчанию пишет в stderr, при заданном LOG_FILE дописывает в файл

use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // Читаем RUST_LOG переменную если она установлена
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        // По умолчанию: INFO уровень
        builder.filter_level(LevelFilter::Info);
        // Отключаем логи от зависимостей (слишком многословно)
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("tower_http", LevelFilter::Warn);
    }

    // Формат логов: [HH:MM:SS LEVEL] модуль - сообщение
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let log_file = std::env::var("LOG_FILE").ok().filter(|p| !p.trim().is_empty());
    if let Some(path) = &log_file {
        match open_log_file(Path::new(path)) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("⚠️  Не удалось открыть файл логов {}: {}", path, e),
        }
    }

    builder.init();

    log::info!("Логирование инициализировано ✓");
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    // Создаем директорию для логов если её нет
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::OpenOptions::new().create(true).append(true).open(path)
}
