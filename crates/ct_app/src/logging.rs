use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,ct_app=info,ct_core=info";

// RUST_LOG wins over the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
