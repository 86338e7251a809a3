use tracing_subscriber::EnvFilter;

use crate::error::CliError;

const DEFAULT_DIRECTIVES: &str = "livemark=info,livemark_core=info";

/// Installs the stderr subscriber. `--log-level` beats `RUST_LOG`.
pub fn init(level: Option<&str>) -> Result<(), CliError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(format!("livemark={level},livemark_core={level}"))
            .map_err(|error| CliError::Logging(error.to_string()))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
