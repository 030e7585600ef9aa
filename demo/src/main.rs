//! assay Commerce Reference Demo CLI
//!
//! Runs one or all of the commerce validation scenarios, or validates a
//! registration request body supplied on the command line.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- user-profile
//!   cargo run -p demo -- order-checkout
//!   cargo run -p demo -- register --body request.json [--limits limits.toml]
//!   echo '{...}' | cargo run -p demo -- register --body -

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use assay_contracts::error::{AssayError, AssayResult};
use assay_ref_commerce::scenarios::{order_checkout, registration, user_profile};
use assay_ref_commerce::RegistrationLimits;

// ── CLI definition ────────────────────────────────────────────────────────────

/// assay: schema-driven validation with nested error trees.
///
/// Each subcommand runs one or all of the commerce scenarios, printing every
/// failure by its dotted field path.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "assay commerce reference demo",
    long_about = "Runs assay commerce scenarios showing flat and nested schemas,\n\
                  slice and date rules, and an HTTP-shaped registration handler."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three commerce scenarios in sequence.
    RunAll,
    /// Scenario 1: User Profile (flat fields plus a nested address).
    UserProfile,
    /// Scenario 2: Order Checkout (dates, line items, nested sections).
    OrderCheckout,
    /// Validate one registration request body and print the response.
    Register {
        /// Path to a JSON request body, or `-` to read stdin.
        #[arg(long)]
        body: String,
        /// Limits TOML to use instead of the bundled defaults.
        #[arg(long)]
        limits: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every failing rule as it runs.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::UserProfile => user_profile::run_scenario(),
        Command::OrderCheckout => order_checkout::run_scenario(),
        Command::Register { body, limits } => run_register(&body, limits.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run_all() -> AssayResult<()> {
    print_banner();
    user_profile::run_scenario()?;
    order_checkout::run_scenario()?;
    registration::run_scenario()?;
    println!("All selected scenarios completed successfully.");
    Ok(())
}

fn run_register(body_source: &str, limits_path: Option<&Path>) -> AssayResult<()> {
    let limits = match limits_path {
        Some(path) => RegistrationLimits::from_file(path)?,
        None => RegistrationLimits::bundled()?,
    };
    debug!(?limits, "using registration limits");

    let body = read_body(body_source)?;
    registration::run_with_body(&body, &limits)?;
    Ok(())
}

fn read_body(source: &str) -> AssayResult<String> {
    if source == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| AssayError::InvalidInput {
                reason: format!("failed to read request body from stdin: {}", e),
            })?;
        return Ok(body);
    }
    std::fs::read_to_string(source).map_err(|e| AssayError::InvalidInput {
        reason: format!("failed to read request body '{}': {}", source, e),
    })
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("assay: Schema-driven Validation");
    println!("Commerce Reference Demo");
    println!("===============================");
    println!();
    println!("Per validation pass:");
    println!("  [1] Build a schema from the value: named fields and nested schemas");
    println!("  [2] Run every rule of every field; failures never stop the pass");
    println!("  [3] Collect messages into an error tree mirroring the schema");
    println!("  [4] Report the tree flattened to JSON, or success if it is empty");
    println!();
}
