use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter, e.g. `MARKS_LOG=debug`.
pub(crate) const LOG_ENV: &str = "MARKS_LOG";

/// Install the stderr subscriber; stdout is reserved for command output.
pub(crate) fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}
