use crate::Client;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::RwLock;
use vst_core::Quote;

/// What one batch refresh did. Symbols appear in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub updated: Vec<String>,
    pub failed: Vec<String>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Latest known quote per symbol, shared between the poller and readers.
///
/// Entries are only ever replaced by a newer successful fetch. A failed
/// fetch leaves the previous quote in place.
#[derive(Clone)]
pub struct QuoteBoard {
    client: Arc<Client>,
    quotes: Arc<RwLock<HashMap<String, Quote>>>,
}

impl QuoteBoard {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            quotes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetch every symbol concurrently and merge whatever came back.
    pub async fn refresh(&self, symbols: &[String]) -> BatchOutcome {
        let results = self.client.quote_batch(symbols).await;

        let mut outcome = BatchOutcome::default();
        let mut quotes = self.quotes.write().await;
        for (symbol, result) in results {
            match result {
                Ok(quote) => {
                    quotes.insert(symbol.clone(), quote);
                    outcome.updated.push(symbol);
                }
                Err(e) => {
                    warn!("Quote for {symbol} failed: {}", e.user_message());
                    outcome.failed.push(symbol);
                }
            }
        }

        debug!(
            "Quote refresh: {} updated, {} failed",
            outcome.updated.len(),
            outcome.failed.len()
        );
        outcome
    }

    pub async fn get(&self, symbol: &str) -> Option<Quote> {
        self.quotes
            .read()
            .await
            .get(&symbol.trim().to_uppercase())
            .cloned()
    }

    /// Sorted copy of the board, for display.
    pub async fn snapshot(&self) -> BTreeMap<String, Quote> {
        self.quotes
            .read()
            .await
            .iter()
            .map(|(symbol, quote)| (symbol.clone(), quote.clone()))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}
