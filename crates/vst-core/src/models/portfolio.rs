use crate::Holding;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

/// `GET /api/portfolio` answers either `{"holdings": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PortfolioWire {
    Wrapped {
        #[serde(default)]
        holdings: Vec<Holding>,
    },
    Bare(Vec<Holding>),
}

impl<'de> Deserialize<'de> for Portfolio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let holdings = match PortfolioWire::deserialize(deserializer)? {
            PortfolioWire::Wrapped { holdings } => holdings,
            PortfolioWire::Bare(holdings) => holdings,
        };
        Ok(Self { holdings })
    }
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Find the holding for `symbol` (case-insensitive).
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn total_cost_basis(&self) -> f64 {
        self.holdings.iter().map(Holding::cost_basis).sum()
    }
}
