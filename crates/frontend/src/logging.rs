//! Logging setup

use tracing_subscriber::prelude::*;

/// Route `tracing` output to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let filter = tracing_subscriber::filter::LevelFilter::from_level(log_level());

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

/// Native builds log to stderr; `RUST_LOG` overrides the level
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level().as_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}
