//! `contract-check` binary: CLI front end for the round-trip checker.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

use contract_check::{CheckReport, ContractError, Mode, Result, RoundTrip, DEFAULT_SCALAR_DECIMAL};

#[derive(Parser, Debug)]
#[command(name = "contract-check", version, about = "Round-trip checker for the shared Scalar data contract")]
struct Cli {
    #[arg(long, global = true, help = "Output a machine-readable JSON report")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the serialized scalar to the interchange file.
    Write {
        /// Path of the interchange file to create or truncate.
        path: PathBuf,
        /// Decimal value to encode (defaults to the shared constant).
        #[arg(long)]
        value: Option<String>,
    },
    /// Read the interchange file and verify the scalar it carries.
    Read {
        /// Path of the interchange file to check.
        path: PathBuf,
        /// Decimal value to expect (defaults to the shared constant).
        #[arg(long)]
        value: Option<String>,
    },
}

fn expected_value(raw: Option<&str>) -> Result<BigUint> {
    Ok(BigUint::from_str(raw.unwrap_or(DEFAULT_SCALAR_DECIMAL))?)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Write { path, value } => {
            let expected = expected_value(value.as_deref())?;
            RoundTrip::new(path, expected).run(Mode::Write)
        }
        Commands::Read { path, value } => {
            let expected = expected_value(value.as_deref())?;
            let check = RoundTrip::new(path, expected);
            let outcome = check.run(Mode::Read);

            if cli.json {
                let report = match &outcome {
                    Ok(()) => Some(CheckReport::pass(check.path(), check.expected())),
                    Err(ContractError::Mismatch { expected, actual }) => {
                        Some(CheckReport::mismatch(check.path(), expected, actual))
                    }
                    // I/O and parse failures carry no decoded value to report.
                    Err(_) => None,
                };
                if let Some(report) = report {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
            outcome
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}
