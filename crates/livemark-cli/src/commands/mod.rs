mod bond;
mod stock;

use std::sync::Arc;

use livemark_core::{FetchConfig, HttpClient, LiveInstrumentData, ReqwestHttpClient, Retriever};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Resolves configuration and dispatches the selected command.
pub async fn run(cli: &Cli) -> Result<LiveInstrumentData, CliError> {
    let config = resolve_config(cli)?;
    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(&config.user_agent));

    match &cli.command {
        Command::Stock(args) => stock::run(args, client, &config).await,
        Command::Bond(args) => bond::run(args, client, &config).await,
    }
}

/// Environment first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<FetchConfig, CliError> {
    let mut config = FetchConfig::from_env()?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_quote_endpoint(endpoint.clone())?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    if let Some(user_agent) = &cli.user_agent {
        config = config.with_user_agent(user_agent.clone());
    }
    Ok(config)
}

async fn retrieve_normalized<R>(
    retriever: &R,
    identifier: &str,
) -> Result<LiveInstrumentData, CliError>
where
    R: Retriever,
{
    tracing::debug!(retriever = retriever.name(), identifier, "running retrieval");
    let data = retriever.retrieve(identifier).await?;
    Ok(data.into())
}
