use serde::{Deserialize, Serialize};

/// One position in a trader's portfolio.
///
/// The backend has shipped two shapes for the same record, so the legacy
/// field names are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(alias = "stockSymbol")]
    pub symbol: String,
    #[serde(alias = "sharesOwned")]
    pub quantity: i64,
    #[serde(default)]
    pub average_price: f64,
}

impl Holding {
    /// Amount paid for the whole position at the average entry price.
    pub fn cost_basis(&self) -> f64 {
        self.quantity as f64 * self.average_price
    }
}
