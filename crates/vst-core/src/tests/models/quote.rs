use crate::Quote;

use serde_json::json;

#[test]
fn given_provider_payload_when_normalized_then_numbered_keys_are_parsed() {
    let raw = json!({
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "168.2000",
            "03. high": "170.1000",
            "04. low": "167.5000",
            "05. price": "169.8800",
            "06. volume": "3521422",
            "07. latest trading day": "2026-10-16",
            "08. previous close": "168.0100",
            "09. change": "1.8700",
            "10. change percent": "1.1130%"
        }
    });

    let quote = Quote::from_provider(&raw).unwrap();

    assert_eq!(quote.symbol, "IBM");
    assert_eq!(quote.open, Some(168.2));
    assert_eq!(quote.price, Some(169.88));
    assert_eq!(quote.volume, Some(3_521_422.0));
    assert_eq!(quote.latest_trading_day.as_deref(), Some("2026-10-16"));
    assert_eq!(quote.previous_close, Some(168.01));
    assert_eq!(quote.change_percent, "1.1130%");
    assert!(quote.is_up());
}

#[test]
fn given_flat_payload_when_normalized_then_camel_case_keys_are_used() {
    let raw = json!({
        "symbol": "AAPL",
        "price": 231.5,
        "change": -2.25,
        "changePercent": "-0.96%",
        "previousClose": 233.75
    });

    let quote = Quote::from_provider(&raw).unwrap();

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, Some(231.5));
    assert_eq!(quote.previous_close, Some(233.75));
    assert_eq!(quote.high, None);
    assert!(!quote.is_up());
}

#[test]
fn given_blank_provider_field_when_normalized_then_falls_back_per_field() {
    let raw = json!({
        "01. symbol": "MSFT",
        "05. price": "",
        "price": "410.12",
        "09. change": null,
        "change": 0
    });

    let quote = Quote::from_provider(&raw).unwrap();

    assert_eq!(quote.price, Some(410.12));
    assert_eq!(quote.change, Some(0.0));
    assert!(quote.is_up());
    assert_eq!(quote.change_percent, "");
}

#[test]
fn given_empty_global_quote_when_normalized_then_none() {
    assert!(Quote::from_provider(&json!({ "Global Quote": {} })).is_none());
}

#[test]
fn given_throttling_notice_when_normalized_then_none() {
    let raw = json!({ "Note": "Thank you for using our API. Please slow down." });
    assert!(Quote::from_provider(&raw).is_none());
}

#[test]
fn given_non_object_when_normalized_then_none() {
    assert!(Quote::from_provider(&json!("IBM")).is_none());
    assert!(Quote::from_provider(&json!(null)).is_none());
}

#[test]
fn given_unparseable_number_when_normalized_then_field_is_none() {
    let raw = json!({ "symbol": "NVDA", "price": "n/a" });

    let quote = Quote::from_provider(&raw).unwrap();

    assert_eq!(quote.price, None);
}

#[test]
fn given_flat_payload_without_symbol_when_normalized_for_request_then_requested_symbol_used() {
    let raw = json!({ "price": 145.0, "change": 1.0 });

    assert!(Quote::from_provider(&raw).is_none());
    let quote = Quote::from_provider_for("IBM", &raw).unwrap();

    assert_eq!(quote.symbol, "IBM");
    assert_eq!(quote.price, Some(145.0));
}

#[test]
fn given_provider_symbol_when_normalized_for_request_then_provider_symbol_kept() {
    let raw = json!({ "Global Quote": { "01. symbol": "BRK-B", "05. price": "470.10" } });

    let quote = Quote::from_provider_for("BRK.B", &raw).unwrap();

    assert_eq!(quote.symbol, "BRK-B");
}

#[test]
fn given_payload_without_quote_fields_when_normalized_for_request_then_none() {
    assert!(Quote::from_provider_for("ZZZZ", &json!({ "Global Quote": {} })).is_none());
    let notice = json!({ "Note": "Thank you for using our API. Please slow down." });
    assert!(Quote::from_provider_for("IBM", &notice).is_none());
}
