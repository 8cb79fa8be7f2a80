pub(crate) mod market_poller;
pub(crate) mod quote_board;

pub use market_poller::{MarketPoller, PollUpdate, PollerHandle};
pub use quote_board::{BatchOutcome, QuoteBoard};
