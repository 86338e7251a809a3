//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LiveStockData`] | Currency and last price of a stock |
//! | [`LiveBondData`] | Currency, last price, coupon and maturity of a bond |
//! | [`LiveInstrumentData`] | Normalized outward shape for either |
//! | [`FieldLabel`] | Labels that announce a value on a bond page |
//!
//! A `LiveStockData` or `LiveBondData` handed out by a retriever always has a
//! non-empty currency and a non-zero last price.

mod field;
mod models;

pub use field::{FieldLabel, FieldValue};
pub use models::{InstrumentKind, LiveBondData, LiveInstrumentData, LiveStockData};
