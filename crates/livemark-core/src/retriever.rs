//! Retriever contract shared by the quote and bond-page sources.
//!
//! | Implementation | Identifier | Output |
//! |----------------|------------|--------|
//! | [`QuoteFetcher`](crate::QuoteFetcher) | ticker symbol | [`LiveStockData`](crate::LiveStockData) |
//! | [`BondPageExtractor`](crate::BondPageExtractor) | page URL | [`LiveBondData`](crate::LiveBondData) |
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use livemark_core::{FetchConfig, LiveInstrumentData, QuoteFetcher, ReqwestHttpClient, Retriever};
//!
//! async fn price_of(symbol: &str) -> Result<LiveInstrumentData, livemark_core::FetchError> {
//!     let config = FetchConfig::default();
//!     let fetcher = QuoteFetcher::new(Arc::new(ReqwestHttpClient::default()), &config);
//!     Ok(fetcher.retrieve(symbol).await?.into())
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;
use crate::LiveInstrumentData;

/// One-shot fetch, parse and validate against a single upstream.
///
/// Implementations hold no per-call state, so one value can serve concurrent
/// calls for different identifiers.
pub trait Retriever: Send + Sync {
    type Output: Into<LiveInstrumentData> + Send;

    /// Short upstream name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Fetch and parse current data for `identifier`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Retrieval`] when the upstream is unreachable, answers
    ///   with a non-success status, returns an undecodable body or a page
    ///   without the mandatory fields
    /// - [`FetchError::Validation`] when the payload decodes but misses a
    ///   required part of its schema
    /// - [`FetchError::Document`] when the body cannot be parsed as a document
    fn retrieve<'a>(
        &'a self,
        identifier: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Self::Output, FetchError>> + Send + 'a>>;
}
