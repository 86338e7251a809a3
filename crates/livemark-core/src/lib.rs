//! # Livemark Core
//!
//! Fetches live market data for a single instrument and normalizes it.
//!
//! ## Overview
//!
//! Two retrievers share one contract ([`Retriever`]) and differ only in what
//! they parse:
//!
//! - [`QuoteFetcher`] reads currency and last price of a stock from a JSON
//!   chart endpoint.
//! - [`BondPageExtractor`] scrapes currency, last price, coupon rate and
//!   maturity of a bond from an HTML page.
//!
//! Both results convert into [`LiveInstrumentData`] for outer surfaces.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | The quote and bond-page retrievers |
//! | [`config`] | Endpoint template, timeout and user agent |
//! | [`domain`] | Result models and bond field labels |
//! | [`error`] | Typed failures |
//! | [`http_client`] | Pluggable HTTP transport |
//! | [`retriever`] | The shared retriever trait |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Caller   │
//! └────────┬────────┘
//!          │ retrieve(identifier)
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Retriever       │────▶│ HTTP Client      │
//! │ (quote | bond)  │     │ (reqwest/fixture)│
//! └────────┬────────┘     └──────────────────┘
//!          │ parse + validate
//!          ▼
//! ┌─────────────────┐
//! │ LiveStockData / │
//! │ LiveBondData    │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use livemark_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Retrieval => "upstream unreachable or page incomplete",
//!         FetchErrorKind::Validation => "upstream schema changed",
//!         FetchErrorKind::Document => "body is not a readable document",
//!     }
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod retriever;

pub use adapters::{BondPageExtractor, QuoteFetcher};
pub use config::{ConfigError, FetchConfig};
pub use domain::{
    FieldLabel, FieldValue, InstrumentKind, LiveBondData, LiveInstrumentData, LiveStockData,
};
pub use error::{
    DocumentError, FetchError, FetchErrorKind, FieldError, FieldErrorKind, RetrievalError,
    ValidationError,
};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use retriever::Retriever;
