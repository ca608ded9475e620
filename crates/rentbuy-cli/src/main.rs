mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::comparison::{
    BuyingCostArgs, CompareArgs, OpportunityCostArgs, RentingCostArgs,
};

/// Rent vs. buy total-cost comparison
#[derive(Parser)]
#[command(
    name = "rvb",
    version,
    about = "Rent vs. buy total-cost comparison",
    long_about = "Compares the multi-year cost of owning a home against renting, \
                  with decimal precision. Computes the amortised mortgage outlay \
                  plus ownership costs, escalated rent plus renters insurance, and \
                  the opportunity cost of the down payment over the same horizon."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full buy-vs-rent comparison
    Compare(CompareArgs),
    /// Total cost of buying over the holding period
    BuyingCost(BuyingCostArgs),
    /// Total cost of renting over the holding period
    RentingCost(RentingCostArgs),
    /// Opportunity cost of the down payment
    OpportunityCost(OpportunityCostArgs),
    /// Print the illustrative market snapshot used by --market
    MarketDefaults,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::BuyingCost(args) => commands::comparison::run_buying_cost(args),
        Commands::RentingCost(args) => commands::comparison::run_renting_cost(args),
        Commands::OpportunityCost(args) => commands::comparison::run_opportunity_cost(args),
        Commands::MarketDefaults => commands::comparison::run_market_defaults(),
        Commands::Version => {
            println!("rvb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
