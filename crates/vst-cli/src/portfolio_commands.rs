use clap::Subcommand;

#[derive(Subcommand)]
pub enum PortfolioCommands {
    /// List holdings
    Show,
    /// Buy shares
    Buy {
        /// Ticker symbol
        symbol: String,
        /// Number of shares (at least 1)
        #[arg(long, short = 'q', allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Sell shares
    Sell {
        /// Ticker symbol
        symbol: String,
        /// Number of shares (at least 1)
        #[arg(long, short = 'q', allow_negative_numbers = true)]
        quantity: i64,
    },
}
