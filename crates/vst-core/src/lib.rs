pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::competition::{Competition, NewCompetition};
pub use models::competition_participant::CompetitionParticipant;
pub use models::holding::Holding;
pub use models::news_item::NewsItem;
pub use models::portfolio::Portfolio;
pub use models::quote::Quote;
pub use models::trade_request::{TradeRequest, TradeSide};
pub use models::tutorial::{NewTutorial, Tutorial};
pub use models::watchlist::Watchlist;

/// Role granted to administrators by the backend.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
/// Role granted to every registered trader.
pub const ROLE_USER: &str = "ROLE_USER";

pub const MAX_WATCHLIST_SYMBOLS: usize = 8;
pub const DEFAULT_WATCHLIST: [&str; 3] = ["IBM", "AAPL", "MSFT"];
pub const QUICK_ADD_SYMBOLS: [&str; 4] = ["TSLA", "GOOGL", "AMZN", "NVDA"];
pub const DEFAULT_STARTING_BALANCE: f64 = 50_000.0;

#[cfg(test)]
mod tests;
