use std::sync::Arc;

use livemark_core::{BondPageExtractor, FetchConfig, HttpClient, LiveInstrumentData};

use crate::cli::BondArgs;
use crate::error::CliError;

pub async fn run(
    args: &BondArgs,
    client: Arc<dyn HttpClient>,
    config: &FetchConfig,
) -> Result<LiveInstrumentData, CliError> {
    let extractor = BondPageExtractor::new(client, config);
    super::retrieve_normalized(&extractor, &args.url).await
}
