//! Vantage CLI - valuation formulas with USD/INR display conversion.
//!
//! # Usage
//!
//! ```bash
//! # DCF valuation with company info from a quote file
//! vantage --quotes-file quotes.csv valuation --ticker RELIANCE.NS --profit 250
//!
//! # Bond price shown in rupees at a fixed rate
//! vantage --currency target --fx-rate 83.2 bond --coupon 6 --discount 5
//!
//! # CAPM expected return as JSON
//! vantage -f json capm --beta 1.3
//!
//! # Persist the rates snapshot location
//! vantage config set rates_file ~/rates/latest.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod session;

use cli::{Cli, Commands};
use session::Session;

fn main() -> Result<()> {
    let Cli { global, command } = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_filter = if global.quiet { "error" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match command {
        Commands::Config(args) => commands::config::execute(args, &global),
        command => dispatch(command, &Session::new(&global)?),
    }
}

fn dispatch(command: Commands, session: &Session) -> Result<()> {
    match command {
        Commands::Valuation(args) => commands::valuation::execute(args, session),
        Commands::Capm(args) => commands::formula::execute(args.request(), session),
        Commands::PutCall(args) => commands::formula::execute(args.request(), session),
        Commands::RiskAversion(args) => commands::formula::execute(args.request(), session),
        Commands::Intrinsic(args) => commands::formula::execute(args.request(), session),
        Commands::Inflation(args) => commands::formula::execute(args.request(), session),
        Commands::Bond(args) => commands::formula::execute(args.request(), session),
        Commands::Roic(args) => commands::formula::execute(args.request(), session),
        Commands::Quote(args) => commands::quote::execute(args, session),
        Commands::Rate(args) => commands::rate::execute(args, session),
        Commands::Catalog(args) => commands::catalog::execute(args, session.format),
        // Handled before a session is built
        Commands::Config(_) => Ok(()),
    }
}
