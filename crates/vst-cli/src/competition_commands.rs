use clap::Subcommand;

#[derive(Subcommand)]
pub enum CompetitionCommands {
    /// List all competitions
    List,
    /// Join a competition
    Join {
        /// Competition ID
        id: i64,
    },
}
