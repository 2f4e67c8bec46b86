use std::path::PathBuf;

use color_eyre::Report;
use directories::ProjectDirs;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, Layer};

/// Configuration for the logging system (modeled on beamterm-atlas's
/// `LoggingConfig`: console + file level, optional log directory, JSON
/// toggle).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub file_level: Level,
    pub console_level: Level,
    pub log_dir: Option<PathBuf>,
    pub json_format: bool,
}

/// Handle for dynamically updating log levels after startup.
pub struct LoggingReloadHandle {
    file_reload_handle: Option<reload::Handle<EnvFilter, tracing_subscriber::Registry>>,
    console_reload_handle: Option<reload::Handle<EnvFilter, tracing_subscriber::Registry>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_level: Level::DEBUG,
            console_level: Level::WARN,
            log_dir: Some(Self::default_log_dir()),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    pub fn default_log_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "img2art") {
            proj_dirs.cache_dir().to_path_buf()
        } else {
            PathBuf::from("img2art-logs")
        }
    }

    /// Builds a config from environment variables, falling back to
    /// `LoggingConfig::default()` for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("IMG2ART_LOG_LEVEL") {
            if let Ok(parsed) = level.parse::<Level>() {
                config.file_level = parsed;
                config.console_level = parsed;
            }
        }

        if let Ok(log_dir) = std::env::var("IMG2ART_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(log_dir));
        }

        if std::env::var("IMG2ART_NO_FILE_LOGS").is_ok() {
            config.log_dir = None;
        }

        if std::env::var("IMG2ART_JSON_LOGS").is_ok() {
            config.json_format = true;
        }

        config
    }
}

/// Initializes the global tracing subscriber from `config`. Returns the
/// file-appender guard (must be held for the process lifetime) and a
/// handle for future reload support.
pub fn init_logging(config: LoggingConfig) -> Result<(Option<WorkerGuard>, LoggingReloadHandle), Report> {
    let mut layers = vec![];
    let mut guard = None;
    let mut reload_handle = LoggingReloadHandle { file_reload_handle: None, console_reload_handle: None };

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "img2art.log");
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);

        let file_filter = EnvFilter::builder().with_default_directive(config.file_level.into()).from_env_lossy();
        let (file_layer, file_reload) = reload::Layer::new(file_filter);
        reload_handle.file_reload_handle = Some(file_reload);

        let file_layer = if config.json_format {
            fmt::layer().json().with_writer(non_blocking).with_filter(file_layer).boxed()
        } else {
            fmt::layer().with_writer(non_blocking).with_filter(file_layer).boxed()
        };
        layers.push(file_layer);
    }

    let console_filter = EnvFilter::builder().with_default_directive(config.console_level.into()).from_env_lossy();
    let (console_layer, console_reload) = reload::Layer::new(console_filter);
    reload_handle.console_reload_handle = Some(console_reload);

    let console_layer = fmt::layer().with_target(false).with_filter(console_layer).boxed();
    layers.push(console_layer);

    tracing_subscriber::registry().with(layers).init();

    Ok((guard, reload_handle))
}
