use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Publish a tutorial
    CreateTutorial {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Remove a tutorial
    DeleteTutorial {
        /// Tutorial ID
        id: i64,
    },
    /// Open a new competition
    CreateCompetition {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start_date: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end_date: String,
        #[arg(long)]
        starting_balance: Option<f64>,
    },
}
