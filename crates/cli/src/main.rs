//! Minibank CLI - Account operations from command line
//!
//! Usage:
//! ```bash
//! minibank debit Anderson 1000.12345 100
//! minibank credit Anderson 1000.12345 100
//! minibank transfer --bank BBVA Ander 1500.2344 Jose 2500 500
//! minibank --json transfer Ander 1500.2344 Jose 2500 500
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use minibank_core::Money;
use tracing_subscriber::EnvFilter;

mod commands;

/// Minibank - exact-decimal accounts with guarded debit and transfer
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log every balance change (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Debit an amount from a freshly opened account
    Debit {
        /// Account owner
        owner: String,
        /// Opening balance
        balance: Money,
        /// Amount to debit
        amount: Money,
    },

    /// Credit an amount to a freshly opened account
    Credit {
        /// Account owner
        owner: String,
        /// Opening balance
        balance: Money,
        /// Amount to credit
        amount: Money,
    },

    /// Transfer between two freshly opened accounts of one bank
    Transfer {
        /// Bank name
        #[arg(long, default_value = "Minibank")]
        bank: String,
        /// Source account owner
        from_owner: String,
        /// Source opening balance
        from_balance: Money,
        /// Destination account owner
        to_owner: String,
        /// Destination opening balance
        to_balance: Money,
        /// Amount to transfer
        amount: Money,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = commands::OutputFormat::from_flag(cli.json);

    match cli.command {
        Commands::Debit {
            owner,
            balance,
            amount,
        } => commands::debit(&owner, balance, amount, output)?,

        Commands::Credit {
            owner,
            balance,
            amount,
        } => commands::credit(&owner, balance, amount, output)?,

        Commands::Transfer {
            bank,
            from_owner,
            from_balance,
            to_owner,
            to_balance,
            amount,
        } => commands::transfer(
            &bank,
            (from_owner.as_str(), from_balance),
            (to_owner.as_str(), to_balance),
            amount,
            output,
        )?,
    }

    Ok(())
}
