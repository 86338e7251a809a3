//! Contract tests for the normalized instrument shape handed to outer surfaces.

use livemark_core::{InstrumentKind, LiveBondData, LiveInstrumentData, LiveStockData};
use serde_json::json;
use time::{Date, Month};

#[test]
fn stock_data_normalizes_without_bond_only_fields() {
    let normalized = LiveInstrumentData::from(LiveStockData {
        currency: String::from("USD"),
        last_price: 132.69,
    });

    assert_eq!(normalized.kind, InstrumentKind::Stock);
    assert_eq!(
        serde_json::to_value(&normalized).expect("serializes"),
        json!({
            "kind": "stock",
            "currency": "USD",
            "last_price": 132.69,
        })
    );
}

#[test]
fn bond_data_normalizes_with_iso_maturity_and_source() {
    let normalized = LiveInstrumentData::from(LiveBondData {
        currency: String::from("GBP"),
        last_price: 108.71,
        next_coupon_rate: 1.5,
        maturity: Some(Date::from_calendar_date(2026, Month::July, 22).expect("valid date")),
        source_url: String::from("https://bonds.example.test/GB00BYZW3G56"),
    });

    assert_eq!(
        serde_json::to_value(&normalized).expect("serializes"),
        json!({
            "kind": "bond",
            "currency": "GBP",
            "last_price": 108.71,
            "next_coupon_rate": 1.5,
            "maturity": "2026-07-22",
            "source_url": "https://bonds.example.test/GB00BYZW3G56",
        })
    );
}

#[test]
fn bond_without_maturity_omits_the_field() {
    let normalized = LiveInstrumentData::from(LiveBondData {
        currency: String::from("GBP"),
        last_price: 108.74,
        next_coupon_rate: 0.0,
        maturity: None,
        source_url: String::from("https://bonds.example.test/GB00BYZW3G56"),
    });

    let value = serde_json::to_value(&normalized).expect("serializes");
    assert!(value.get("maturity").is_none());
    assert_eq!(value["next_coupon_rate"], json!(0.0));
}

#[test]
fn normalized_json_reads_back_into_the_same_value() {
    let original = LiveInstrumentData::from(LiveBondData {
        currency: String::from("EUR"),
        last_price: 99.12,
        next_coupon_rate: 0.25,
        maturity: Some(Date::from_calendar_date(2031, Month::March, 1).expect("valid date")),
        source_url: String::from("https://bonds.example.test/IT0005436693"),
    });

    let text = serde_json::to_string(&original).expect("serializes");
    let parsed: LiveInstrumentData = serde_json::from_str(&text).expect("deserializes");
    assert_eq!(parsed, original);
}
