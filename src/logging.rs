use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter: explicit directives, else `RUST_LOG`, else `warn`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(d) if !d.trim().is_empty() => {
            EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install a fmt subscriber on stderr. Returns `false` if one was already set.
pub fn init_logging(directives: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
