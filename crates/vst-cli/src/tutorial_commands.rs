use clap::Subcommand;

#[derive(Subcommand)]
pub enum TutorialCommands {
    /// List all tutorials
    List,
}
