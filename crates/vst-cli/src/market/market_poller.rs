use crate::{BatchOutcome, QuoteBoard};

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, info};
use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{MissedTickBehavior, interval};
use vst_core::Quote;

/// Delivered to the caller after each completed refresh.
#[derive(Debug, Clone, Serialize)]
pub struct PollUpdate {
    pub poll: u64,
    pub outcome: BatchOutcome,
    pub quotes: BTreeMap<String, Quote>,
}

/// Stops a running [`MarketPoller`]. Cheap to clone.
#[derive(Clone)]
pub struct PollerHandle {
    shutdown_tx: broadcast::Sender<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        debug!("Market poller stop requested");
        let _ = self.shutdown_tx.send(());
    }
}

/// Re-issues the quote batch on a fixed interval until stopped.
///
/// Each tick starts its refresh in its own task. A slow batch is not
/// cancelled when the next tick fires, so results may arrive out of order;
/// the board keeps whichever write landed last.
pub struct MarketPoller {
    board: QuoteBoard,
    interval: Duration,
    max_polls: Option<u64>,
    shutdown_tx: broadcast::Sender<()>,
    shutdown_rx: broadcast::Receiver<()>,
}

impl MarketPoller {
    pub fn new(board: QuoteBoard, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        Self {
            board,
            interval,
            max_polls: None,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Stop by itself after `polls` completed refreshes.
    pub fn with_max_polls(mut self, polls: u64) -> Self {
        self.max_polls = Some(polls);
        self
    }

    pub fn handle(&self) -> PollerHandle {
        PollerHandle {
            shutdown_tx: self.shutdown_tx.clone(),
        }
    }

    pub fn board(&self) -> &QuoteBoard {
        &self.board
    }

    /// Poll until stopped through a [`PollerHandle`] or until the poll limit
    /// is reached. Returns the number of completed refreshes.
    pub async fn run<F>(mut self, symbols: Vec<String>, mut on_update: F) -> u64
    where
        F: FnMut(PollUpdate),
    {
        if symbols.is_empty() || self.max_polls == Some(0) {
            return 0;
        }

        info!(
            "Polling {} symbol(s) every {}",
            symbols.len(),
            humantime::format_duration(self.interval)
        );

        let (done_tx, mut done_rx) = mpsc::unbounded_channel();
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut completed = 0;

        loop {
            tokio::select! {
                _ = self.shutdown_rx.recv() => {
                    debug!("Market poller shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    let board = self.board.clone();
                    let symbols = symbols.clone();
                    let done_tx = done_tx.clone();
                    tokio::spawn(async move {
                        let outcome = board.refresh(&symbols).await;
                        let _ = done_tx.send(outcome);
                    });
                }
                Some(outcome) = done_rx.recv() => {
                    completed += 1;
                    on_update(PollUpdate {
                        poll: completed,
                        outcome,
                        quotes: self.board.snapshot().await,
                    });
                    if self.max_polls.is_some_and(|max| completed >= max) {
                        break;
                    }
                }
            }
        }

        completed
    }
}
