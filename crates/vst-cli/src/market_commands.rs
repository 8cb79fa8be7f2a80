use clap::Subcommand;

#[derive(Subcommand)]
pub enum MarketCommands {
    /// Fetch quotes once
    Quote {
        /// Symbols to fetch (defaults to the configured watchlist)
        symbols: Vec<String>,
    },
    /// Keep fetching quotes on an interval, one JSON line per refresh
    Watch {
        /// Symbols to watch (defaults to the configured watchlist)
        symbols: Vec<String>,
        /// Seconds between refreshes (defaults to market.poll_interval_secs)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(long)]
        count: Option<u64>,
    },
    /// Market news headlines
    News,
}
