//! `fibo` - command-line calculator for Zeckendorf integers.
//!
//! ```text
//! fibo encode 42            ->  10010000
//! fibo normalize 1111       ->  10100
//! fibo eval 1001 + 10       ->  10000
//! fibo eval '#7' '<' '#8'   ->  true
//! ```
//!
//! Results go to stdout; logs go to stderr, filtered by `RUST_LOG` or the
//! `[log] level` config entry.

mod eval;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fibo_config::FiboConfig;
use fibo_types::Fibo;

use crate::eval::{Op, evaluate, parse_operand, render_value};

#[derive(Parser)]
#[command(name = "fibo")]
#[command(about = "Arithmetic on Fibonacci-base (Zeckendorf) integers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Print the decimal value next to each result
    #[arg(long, global = true)]
    decimal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a decimal integer to canonical digits
    Encode {
        /// Non-negative decimal integer
        value: u64,
    },
    /// Normalize a raw digit string
    Normalize {
        /// Digits, most significant first
        digits: String,
    },
    /// Evaluate `LHS OP RHS`
    Eval {
        /// Digit string, or `#N` for a decimal integer
        lhs: String,
        /// One of: + & | ^ << == != < <= > >=
        op: Op,
        /// Digit string, `#N`, or the shift count for `<<`
        rhs: String,
    },
}

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_err) = match FiboConfig::load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => (FiboConfig::default(), Some(err)),
    };
    init_tracing(config.log_level());
    if let Some(err) = config_err {
        tracing::warn!(path = %err.path().display(), "ignoring config: {err}");
    }

    let decimal = cli.decimal || config.show_decimal();
    let line = match cli.command {
        Commands::Encode { value } => render_value(&Fibo::from(value), decimal),
        Commands::Normalize { digits } => {
            let value = parse_operand(&digits).context("cannot normalize")?;
            render_value(&value, decimal)
        }
        Commands::Eval { lhs, op, rhs } => evaluate(&lhs, op, &rhs)?.render(decimal),
    };
    println!("{line}");
    Ok(())
}
