use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Current quote for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStockData {
    pub currency: String,
    pub last_price: f64,
}

/// Current market data scraped from a bond page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveBondData {
    pub currency: String,
    pub last_price: f64,
    /// Zero when the page does not show a coupon rate.
    pub next_coupon_rate: f64,
    #[serde(with = "iso_date::option", default)]
    pub maturity: Option<Date>,
    /// Page the data was read from, after redirects.
    pub source_url: String,
}

/// Instrument family of a normalized result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Stock,
    Bond,
}

/// Source-independent shape handed to outer surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveInstrumentData {
    pub kind: InstrumentKind,
    pub currency: String,
    pub last_price: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_coupon_rate: Option<f64>,
    #[serde(
        with = "iso_date::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub maturity: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
}

impl From<LiveStockData> for LiveInstrumentData {
    fn from(value: LiveStockData) -> Self {
        Self {
            kind: InstrumentKind::Stock,
            currency: value.currency,
            last_price: value.last_price,
            next_coupon_rate: None,
            maturity: None,
            source_url: None,
        }
    }
}

impl From<LiveBondData> for LiveInstrumentData {
    fn from(value: LiveBondData) -> Self {
        Self {
            kind: InstrumentKind::Bond,
            currency: value.currency,
            last_price: value.last_price,
            next_coupon_rate: Some(value.next_coupon_rate),
            maturity: value.maturity,
            source_url: Some(value.source_url),
        }
    }
}
