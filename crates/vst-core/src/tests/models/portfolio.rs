use crate::Portfolio;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_wrapped_holdings_when_deserialized_then_reads_holdings() {
    let portfolio: Portfolio = serde_json::from_value(json!({
        "holdings": [
            { "symbol": "IBM", "quantity": 10, "averagePrice": 150.0 },
            { "symbol": "AAPL", "quantity": 2, "averagePrice": 200.5 }
        ]
    }))
    .unwrap();

    assert_that!(portfolio.holdings.len(), eq(2));
    assert_that!(portfolio.holding("ibm").map(|h| h.quantity), some(eq(10)));
    assert_that!(portfolio.total_cost_basis(), eq(1901.0));
}

#[test]
fn given_bare_array_with_legacy_names_when_deserialized_then_aliases_apply() {
    let portfolio: Portfolio = serde_json::from_value(json!([
        { "id": 1, "stockSymbol": "MSFT", "sharesOwned": 3, "averagePrice": 400.0 }
    ]))
    .unwrap();

    assert_that!(portfolio.holdings[0].symbol, eq("MSFT"));
    assert_that!(portfolio.holdings[0].quantity, eq(3));
}

#[test]
fn given_object_without_holdings_when_deserialized_then_empty() {
    let portfolio: Portfolio = serde_json::from_value(json!({})).unwrap();
    assert_that!(portfolio.is_empty(), eq(true));
}
