pub mod commands;

use clap::{Parser, Subcommand};
use orderlens_core::config::{AppConfig, LoadOptions};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "orderlens",
    about = "Orderlens operator CLI",
    long_about = "Inspect configuration, validate the dataset, and run one-shot customer/order analytics queries.",
    after_help = "Examples:\n  orderlens doctor --json\n  orderlens recent --country Brazil --limit 2\n  orderlens spend 1 999 1"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config and load both dataset files")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Most recently joined customers of a country, with total spend")]
    Recent {
        #[arg(long, help = "Country name, matched case-sensitively")]
        country: String,
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i64,
    },
    #[command(about = "Look up a customer id by exact name")]
    CustomerId {
        #[arg(long)]
        name: String,
    },
    #[command(about = "Count a customer's orders in a calendar month")]
    OrderCount {
        #[arg(long, help = "Customer name as recorded on the orders")]
        name: String,
        #[arg(long, help = "Month in YYYY-MM form")]
        month: String,
    },
    #[command(about = "Total spend per customer id, in the order given")]
    Spend {
        #[arg(required = true, allow_negative_numbers = true)]
        customer_ids: Vec<i64>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // config failures are reported by the command itself
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        orderlens_mcp::init_logging(&config.logging);
    }

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Recent { country, limit } => commands::query::recent(&country, limit),
        Command::CustomerId { name } => commands::query::customer_id(&name),
        Command::OrderCount { name, month } => commands::query::order_count(&name, &month),
        Command::Spend { customer_ids } => commands::query::spend(&customer_ids),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
