use std::env;
use tracing_subscriber::EnvFilter;

const DEBUG_ENV: &str = "SENTSIM_DEBUG";

/// Installs the global tracing subscriber. Logs go to stderr so stdout only
/// carries the report.
pub fn init_tracing(verbose: bool) {
    let directive = filter_directive(
        verbose,
        env::var(EnvFilter::DEFAULT_ENV).ok(),
        env::var(DEBUG_ENV).ok(),
    );

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filter_directive(verbose: bool, rust_log: Option<String>, debug: Option<String>) -> String {
    if let Some(rust_log) = rust_log.filter(|v| !v.trim().is_empty()) {
        return rust_log;
    }
    let debug = debug.is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");
    if verbose || debug {
        "debug".to_string()
    } else {
        "warn".to_string()
    }
}
