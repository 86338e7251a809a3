use std::sync::Arc;

use livemark_core::{FetchConfig, HttpClient, LiveInstrumentData, QuoteFetcher};

use crate::cli::StockArgs;
use crate::error::CliError;

pub async fn run(
    args: &StockArgs,
    client: Arc<dyn HttpClient>,
    config: &FetchConfig,
) -> Result<LiveInstrumentData, CliError> {
    let fetcher = QuoteFetcher::new(client, config);
    super::retrieve_normalized(&fetcher, &args.symbol).await
}
