use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::{Mode, Settings};

fn ansi_enabled() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(settings: &Settings, mode: Mode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi_enabled());

    // CloudWatch stamps every line already.
    match (settings.json_logs, mode) {
        (true, Mode::Lambda) => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json().without_time())
            .init(),
        (true, Mode::Local) => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
        (false, Mode::Lambda) => tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time())
            .init(),
        (false, Mode::Local) => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
    }

    tracing::debug!(
        level = %settings.log_level,
        json = settings.json_logs,
        mode = ?mode,
        "logging initialized"
    );
}
