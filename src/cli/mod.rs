pub mod add;
pub mod menu;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moneyminder", about = "Personal finance ledger CLI.")]
pub struct Cli {
    /// Path to the configuration file (default: ~/.config/moneyminder/config.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transaction register for a kind, with an optional date range.
    Report {
        /// Kind: revenue or expenses (or the kind id)
        kind: String,
        /// Start date: DD-MM-YYYY
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: DD-MM-YYYY
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Show configuration, database location and row counts.
    Status,
}
