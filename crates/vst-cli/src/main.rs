//! vst - Virtual Stock Trader CLI
//!
//! Every command is a page of the trading app. Pages behind a login or the
//! administrator role are guarded locally before any request is sent; the
//! backend still checks the bearer token on every call.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the token is stored per backend origin under ~/.vst/tokens)
//! vst login --email trader@example.com --password secret
//!
//! # Quotes for the configured watchlist, refreshed every 15 seconds
//! vst market watch
//!
//! # Buy five shares
//! vst portfolio buy AAPL --quantity 5 --pretty
//! ```

use vst_auth::FileTokenStore;
use vst_cli::{App, Cli, CliResult, logger};
use vst_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Some(route) = e.redirect() {
                eprintln!("Redirect: {}", route);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let store = FileTokenStore::for_origin(&config.token_dir()?, &config.api.base_url)?;
    let mut app = App::new(config, Arc::new(store))?;

    app.dispatch(cli.command).await
}
