//! Normalised market quote.
//!
//! The backend proxies the market-data provider verbatim, so a quote arrives
//! either wrapped in `"Global Quote"` with numbered keys (`"05. price"`) and
//! stringly-typed numbers, or already flattened with camelCase keys. Each
//! field is looked up independently: provider key first, then the plain key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PROVIDER_WRAPPER: &str = "Global Quote";

/// Data fields other than the symbol, as (provider key, plain key).
const QUOTE_KEYS: [(&str, &str); 9] = [
    ("02. open", "open"),
    ("03. high", "high"),
    ("04. low", "low"),
    ("05. price", "price"),
    ("06. volume", "volume"),
    ("07. latest trading day", "latestTradingDay"),
    ("08. previous close", "previousClose"),
    ("09. change", "change"),
    ("10. change percent", "changePercent"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub latest_trading_day: Option<String>,
    pub previous_close: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: String,
}

impl Quote {
    /// Normalise a provider-shaped payload. Returns `None` when the payload
    /// carries no symbol (unknown ticker, provider throttling notice, ...).
    pub fn from_provider(raw: &Value) -> Option<Self> {
        let fields = quote_fields(raw)?;
        let symbol = text(fields, "01. symbol", "symbol")?;
        Some(Self::from_fields(symbol, fields))
    }

    /// Normalise the answer to a request for `requested`. A payload without
    /// its own symbol is filed under the requested one, as long as it carries
    /// at least one quote field.
    pub fn from_provider_for(requested: &str, raw: &Value) -> Option<Self> {
        let fields = quote_fields(raw)?;
        if let Some(symbol) = text(fields, "01. symbol", "symbol") {
            return Some(Self::from_fields(symbol, fields));
        }

        QUOTE_KEYS
            .iter()
            .any(|(provider_key, key)| lookup(fields, provider_key, key).is_some())
            .then(|| Self::from_fields(requested.to_string(), fields))
    }

    fn from_fields(symbol: String, fields: &Map<String, Value>) -> Self {
        Self {
            symbol,
            open: number(fields, "02. open", "open"),
            high: number(fields, "03. high", "high"),
            low: number(fields, "04. low", "low"),
            price: number(fields, "05. price", "price"),
            volume: number(fields, "06. volume", "volume"),
            latest_trading_day: text(fields, "07. latest trading day", "latestTradingDay"),
            previous_close: number(fields, "08. previous close", "previousClose"),
            change: number(fields, "09. change", "change"),
            change_percent: text(fields, "10. change percent", "changePercent")
                .unwrap_or_default(),
        }
    }

    /// Flat moves count as up.
    pub fn is_up(&self) -> bool {
        self.change.unwrap_or(0.0) >= 0.0
    }
}

fn quote_fields(raw: &Value) -> Option<&Map<String, Value>> {
    match raw.get(PROVIDER_WRAPPER) {
        Some(Value::Object(inner)) => Some(inner),
        _ => raw.as_object(),
    }
}

/// First non-empty value under the provider key, else the plain key.
fn lookup<'a>(fields: &'a Map<String, Value>, provider_key: &str, key: &str) -> Option<&'a Value> {
    [provider_key, key]
        .into_iter()
        .filter_map(|k| fields.get(k))
        .find(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn text(fields: &Map<String, Value>, provider_key: &str, key: &str) -> Option<String> {
    match lookup(fields, provider_key, key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(fields: &Map<String, Value>, provider_key: &str, key: &str) -> Option<f64> {
    match lookup(fields, provider_key, key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    }
}
