//! pepeng CLI - Shipment log for Pepeng Express.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod display;

use commands::submit::ShipmentArgs;
use config::Config;
use display::Format;

#[derive(Parser)]
#[command(name = "pepeng")]
#[command(about = "Record shipments and estimate courier arrival dates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress log output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported couriers and their transit times
    Couriers,

    /// Estimate the arrival date for a courier
    Estimate {
        /// Courier code (JNE, TIKI or POS; other codes use the 3-day fallback)
        courier: String,

        /// Ship date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record one shipment from arguments
    Submit {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "card")]
        format: Format,
    },

    /// Fill in shipments interactively
    Session {
        /// Output format
        #[arg(short, long, value_enum, default_value = "card")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.verbose, cli.quiet, cli.today.as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Couriers => commands::couriers::list_couriers(),
        Commands::Estimate { courier, date } => {
            commands::estimate::show_estimate(&courier, date.as_deref(), &*config.clock())
        }
        Commands::Submit { shipment, format } => {
            commands::submit::submit(&shipment, format, config.clock())
        }
        Commands::Session { format } => commands::session::run_session(format, config.clock()),
    }
}
