mod cli;
mod config;
mod db;
mod error;
mod fmt;
mod input;
mod ledger;
mod models;
mod reports;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};
use config::ConfigStore;

fn main() {
    let cli = Cli::parse();

    let store = ConfigStore::new(
        cli.config
            .map(PathBuf::from)
            .unwrap_or_else(ConfigStore::default_path),
    );

    let result = match cli.command {
        Some(Commands::Report {
            kind,
            from_date,
            to_date,
        }) => cli::report::run(&store, &kind, from_date.as_deref(), to_date.as_deref()),
        Some(Commands::Status) => cli::status::run(&store),
        None => cli::menu::run(&store),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
