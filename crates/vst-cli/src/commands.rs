use crate::{
    admin_commands::AdminCommands, competition_commands::CompetitionCommands,
    market_commands::MarketCommands, portfolio_commands::PortfolioCommands,
    tutorial_commands::TutorialCommands,
};

use clap::Subcommand;
use vst_auth::Route;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Check that the backend is reachable
    Status,

    /// Show who is signed in
    #[command(alias = "whoami")]
    Dashboard,

    /// Holdings and trading
    Portfolio {
        #[command(subcommand)]
        action: PortfolioCommands,
    },

    /// Quotes and news
    Market {
        #[command(subcommand)]
        action: MarketCommands,
    },

    /// Learning material
    Tutorials {
        #[command(subcommand)]
        action: TutorialCommands,
    },

    /// Trading competitions
    Competitions {
        #[command(subcommand)]
        action: CompetitionCommands,
    },

    /// Administrator tools
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

impl Commands {
    /// The page this command stands for; its guard decides whether it runs.
    pub fn route(&self) -> Route {
        match self {
            Self::Login { .. } => Route::Login,
            Self::Signup { .. } => Route::Signup,
            Self::Logout | Self::Status => Route::Landing,
            Self::Dashboard => Route::Dashboard,
            Self::Portfolio { .. } => Route::Portfolio,
            Self::Market { .. } => Route::Market,
            Self::Tutorials { .. } => Route::Tutorials,
            Self::Competitions { .. } => Route::Competitions,
            Self::Admin { .. } => Route::Admin,
        }
    }
}
