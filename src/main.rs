mod categorizer;
mod cli;
mod db;
mod error;
mod fmt;
mod ids;
mod insights;
mod ledger;
mod models;
mod parser;
mod settings;
mod store;

use clap::Parser;
use tracing_subscriber::{fmt as log_fmt, EnvFilter};

use cli::{Cli, Commands};

const LOG_ENV: &str = "BUDGETBUDDY_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("budgetbuddy=warn"));
    log_fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, currency } => cli::init::run(data_dir, currency.as_deref()),
        Commands::Add {
            title,
            amount,
            entry_type,
            category,
            date,
        } => cli::entries::add(&title, amount, &entry_type, &category, date.as_deref()),
        Commands::Quick { text } => cli::entries::quick(&text),
        Commands::Parse { text } => cli::entries::preview(&text),
        Commands::List => cli::entries::list(),
        Commands::Remove { id } => cli::entries::remove(&id),
        Commands::Clear => cli::entries::clear(),
        Commands::Totals => cli::summary::totals(),
        Commands::Tip => cli::summary::tip(),
        Commands::Currency { code } => cli::currency::run(code.as_deref()),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
