use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

#[cfg(debug_assertions)]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;
#[cfg(not(debug_assertions))]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Install the global subscriber, later calls are no-ops.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time();

    cfg_if::cfg_if! { if #[cfg(target_arch = "wasm32")] {
        use tracing_subscriber::fmt::format::Pretty;
        use tracing_web::{performance_layer, MakeWebConsoleWriter};

        let fmt_layer = fmt_layer
            .with_writer(MakeWebConsoleWriter::new())
            .with_filter(MAX_LOG_LEVEL);
        let perf_layer = performance_layer()
            .with_details_from_fields(Pretty::default())
            .with_filter(MAX_LOG_LEVEL);
        let res = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init();
    } else {
        let res = tracing_subscriber::registry()
            .with(fmt_layer.with_filter(MAX_LOG_LEVEL))
            .try_init();
    }}

    if res.is_err() {
        tracing::debug!("logging already initialized");
    }
}
