use crate::{CoreError, TradeRequest, TradeSide};

#[test]
fn test_trade_request_normalizes_symbol() {
    let request = TradeRequest::new(" aapl", 5).unwrap();
    assert_eq!(request.symbol, "AAPL");
    assert_eq!(request.quantity, 5);
}

#[test]
fn test_trade_request_rejects_non_positive_quantity() {
    assert!(matches!(
        TradeRequest::new("AAPL", 0),
        Err(CoreError::InvalidQuantity { value: 0, .. })
    ));
    assert!(matches!(
        TradeRequest::new("AAPL", -3),
        Err(CoreError::InvalidQuantity { value: -3, .. })
    ));
}

#[test]
fn test_trade_request_rejects_blank_symbol() {
    assert!(matches!(
        TradeRequest::new("  ", 1),
        Err(CoreError::InvalidSymbol { .. })
    ));
}

#[test]
fn test_trade_request_wire_shape() {
    let body = serde_json::to_value(TradeRequest::new("msft", 2).unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "symbol": "MSFT", "quantity": 2 }));
}

#[test]
fn test_trade_side_paths() {
    assert_eq!(TradeSide::Buy.path(), "/api/portfolio/buy");
    assert_eq!(TradeSide::Sell.path(), "/api/portfolio/sell");
    assert_eq!(TradeSide::Sell.as_str(), "sell");
}
