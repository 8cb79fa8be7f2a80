use crate::{CoreError, CoreResult, Watchlist};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Endpoint that executes this side of the trade.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Buy => "/api/portfolio/buy",
            Self::Sell => "/api/portfolio/sell",
        }
    }
}

/// Body of a buy or sell order. Only constructible with a usable symbol and
/// a positive quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeRequest {
    pub symbol: String,
    pub quantity: i64,
}

impl TradeRequest {
    #[track_caller]
    pub fn new(symbol: &str, quantity: i64) -> CoreResult<Self> {
        let symbol =
            Watchlist::normalize_symbol(symbol).ok_or_else(|| CoreError::InvalidSymbol {
                value: symbol.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if quantity < 1 {
            return Err(CoreError::InvalidQuantity {
                value: quantity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { symbol, quantity })
    }
}
