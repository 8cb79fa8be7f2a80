//! vst-cli library
//!
//! Exports the HTTP client, the market board and the command dispatcher so
//! the binary stays thin and integration tests can drive everything.

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod logger;
pub mod market;

pub mod admin_commands;
pub mod competition_commands;
pub mod market_commands;
pub mod portfolio_commands;
pub mod tutorial_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use market::{BatchOutcome, MarketPoller, PollUpdate, PollerHandle, QuoteBoard};
