use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{FetchConfig, SYMBOL_PLACEHOLDER};
use crate::error::{FetchError, RetrievalError, ValidationError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::retriever::Retriever;
use crate::LiveStockData;

const UPSTREAM: &str = "quote endpoint";

/// Fetches the current price of a stock from a JSON chart endpoint.
#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
    timeout_ms: u64,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self {
            http_client,
            endpoint: config.quote_endpoint.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Request URL for `identifier`: trimmed, upper-cased and percent-encoded
    /// into the endpoint template.
    pub fn endpoint_for(&self, identifier: &str) -> Result<String, RetrievalError> {
        let symbol = identifier.trim();
        if symbol.is_empty() {
            return Err(RetrievalError::EmptyIdentifier);
        }

        let symbol = symbol.to_uppercase();
        Ok(self
            .endpoint
            .replace(SYMBOL_PLACEHOLDER, &urlencoding::encode(&symbol)))
    }

    async fn fetch(&self, identifier: &str) -> Result<LiveStockData, FetchError> {
        let url = self.endpoint_for(identifier)?;
        debug!(%url, "requesting chart");

        let request = HttpRequest::get(&url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|cause| {
                warn!(%url, error = %cause, "chart request failed");
                RetrievalError::Transport {
                    upstream: UPSTREAM,
                    cause,
                }
            })?;

        if !response.is_ok() {
            warn!(%url, status = response.status, "chart request rejected");
            return Err(RetrievalError::Status {
                upstream: UPSTREAM,
                status: response.status,
            }
            .into());
        }

        let data = parse_chart_response(&response.body)?;
        info!(
            symbol = %identifier.trim().to_uppercase(),
            currency = %data.currency,
            last_price = data.last_price,
            "stock quote retrieved"
        );
        Ok(data)
    }
}

impl Retriever for QuoteFetcher {
    type Output = LiveStockData;

    fn name(&self) -> &'static str {
        UPSTREAM
    }

    fn retrieve<'a>(
        &'a self,
        identifier: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<LiveStockData, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch(identifier))
    }
}

/// Decode a chart payload and pull currency and last price out of it.
///
/// A body that is not JSON of the expected shape is a retrieval failure; a
/// well-formed body missing the result array, currency or price is a
/// validation failure.
pub fn parse_chart_response(body: &[u8]) -> Result<LiveStockData, FetchError> {
    let chart: ChartResponse =
        serde_json::from_slice(body).map_err(|cause| RetrievalError::Decode {
            upstream: UPSTREAM,
            cause,
        })?;

    Ok(chart.into_live_data()?)
}

// A JSON null anywhere on the path reads as "absent", never as a decode error.
#[derive(Debug, Default, Deserialize)]
struct ChartResponse {
    #[serde(default)]
    chart: Option<ChartEnvelope>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Option<Vec<Option<ChartResult>>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    currency: Option<String>,
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<f64>,
}

impl ChartResponse {
    fn into_live_data(self) -> Result<LiveStockData, ValidationError> {
        let first = self
            .chart
            .and_then(|chart| chart.result)
            .and_then(|results| results.into_iter().next())
            .ok_or(ValidationError::MissingResultArray)?;

        let (currency, price) = match first.and_then(|result| result.meta) {
            Some(meta) => (meta.currency, meta.regular_market_price),
            None => (None, None),
        };

        let currency = currency.ok_or(ValidationError::MissingCurrency)?;
        let last_price = price.ok_or(ValidationError::MissingPrice)?;

        if currency.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }
        if last_price == 0.0 {
            return Err(ValidationError::ZeroPrice);
        }

        Ok(LiveStockData {
            currency,
            last_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FetchErrorKind;
    use crate::http_client::{HttpError, HttpResponse};

    use super::*;

    struct NeverCalled;

    impl HttpClient for NeverCalled {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async { Err(HttpError::new("no network in unit tests")) })
        }
    }

    fn fetcher(endpoint: &str) -> QuoteFetcher {
        let config = FetchConfig::default()
            .with_quote_endpoint(endpoint)
            .expect("endpoint has placeholder");
        QuoteFetcher::new(Arc::new(NeverCalled), &config)
    }

    #[test]
    fn endpoint_interpolates_upper_cased_symbol() {
        let fetcher = fetcher("https://quotes.example.test/v8/finance/chart/{symbol}?interval=1d");
        assert_eq!(
            fetcher.endpoint_for(" eni.mi ").expect("symbol is valid"),
            "https://quotes.example.test/v8/finance/chart/ENI.MI?interval=1d"
        );
    }

    #[test]
    fn endpoint_percent_encodes_reserved_characters() {
        let fetcher = fetcher("https://quotes.example.test/chart/{symbol}");
        assert_eq!(
            fetcher.endpoint_for("^gspc").expect("symbol is valid"),
            "https://quotes.example.test/chart/%5EGSPC"
        );
    }

    #[test]
    fn blank_identifier_is_rejected_before_any_request() {
        let fetcher = fetcher("https://quotes.example.test/chart/{symbol}");
        assert!(matches!(
            fetcher.endpoint_for("   "),
            Err(RetrievalError::EmptyIdentifier)
        ));
    }

    #[test]
    fn parses_currency_and_price_verbatim() {
        let body = br#"{"chart":{"result":[{"meta":{"currency":"USD","regularMarketPrice":132.69}}],"error":null}}"#;
        let data = parse_chart_response(body).expect("payload is complete");
        assert_eq!(
            data,
            LiveStockData {
                currency: String::from("USD"),
                last_price: 132.69,
            }
        );
    }

    #[test]
    fn empty_object_is_a_missing_result_array() {
        let error = parse_chart_response(b"{}").expect_err("no result array");
        assert!(matches!(
            error,
            FetchError::Validation(ValidationError::MissingResultArray)
        ));
    }

    #[test]
    fn null_chart_is_a_missing_result_array() {
        let error = parse_chart_response(br#"{"chart":null}"#).expect_err("chart is null");
        assert!(matches!(
            error,
            FetchError::Validation(ValidationError::MissingResultArray)
        ));
    }

    #[test]
    fn null_result_entry_is_a_missing_currency() {
        let error = parse_chart_response(br#"{"chart":{"result":[null]}}"#)
            .expect_err("first result is null");
        assert!(matches!(
            error,
            FetchError::Validation(ValidationError::MissingCurrency)
        ));
    }

    #[test]
    fn null_meta_is_a_missing_currency() {
        let error = parse_chart_response(br#"{"chart":{"result":[{"meta":null}]}}"#)
            .expect_err("meta is null");
        assert!(matches!(
            error,
            FetchError::Validation(ValidationError::MissingCurrency)
        ));
    }

    #[test]
    fn wrong_field_type_is_a_decode_failure() {
        let error = parse_chart_response(
            br#"{"chart":{"result":[{"meta":{"currency":"USD","regularMarketPrice":"high"}}]}}"#,
        )
        .expect_err("price is a string");
        assert_eq!(error.kind(), FetchErrorKind::Retrieval);
        assert!(matches!(
            error,
            FetchError::Retrieval(RetrievalError::Decode { .. })
        ));
    }

    #[test]
    fn zero_price_violates_the_result_invariant() {
        let error = parse_chart_response(
            br#"{"chart":{"result":[{"meta":{"currency":"EUR","regularMarketPrice":0}}]}}"#,
        )
        .expect_err("zero price");
        assert!(matches!(
            error,
            FetchError::Validation(ValidationError::ZeroPrice)
        ));
    }
}
