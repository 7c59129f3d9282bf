use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::LogFormat;

const DEFAULT_FILTER: &str = "fakturace_backend=debug,tower_http=debug";

pub fn init_logging(log_format: &LogFormat) {
    if *log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
