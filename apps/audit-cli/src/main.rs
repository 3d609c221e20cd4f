//! Policy Audit CLI
//!
//! Reads a JSON log of agent responses, runs every record through the
//! compliance engine and prints the batch result as JSON.
//!
//! ```text
//! policy-audit logs.json --config policy.toml --truth-source faq.md --pretty
//! ```
//!
//! The log must be a JSON array. Each entry is an object with an optional
//! `id` and the response text under `response`, `body` or `text`.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compliance_engine::{AuditConfig, ComplianceEngine, TruthSourceEnricher};

mod error;
mod report;

use error::CliError;

/// Command-line arguments for the policy audit
#[derive(Parser, Debug)]
#[command(name = "policy-audit")]
#[command(about = "Audit agent transcripts against institutional policy")]
struct Args {
    /// JSON file containing an array of records
    input: PathBuf,

    /// TOML policy configuration (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference document that risky claims are cross-checked against
    #[arg(long)]
    truth_source: Option<PathBuf>,

    /// Evaluate records one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the report
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)?,
        None => AuditConfig::default(),
    };
    if args.sequential {
        config.parallel = false;
    }

    let mut engine = ComplianceEngine::with_config(config).map_err(CliError::from)?;

    if let Some(path) = &args.truth_source {
        let truth_source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read truth source: {}", path.display()))?;
        info!("Cross-checking claims against {}", path.display());
        engine = engine.with_enricher(TruthSourceEnricher::new(&truth_source));
    }

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let source = args.input.display().to_string();

    match report::audit_log(&engine, &source, &content) {
        Ok(report) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(err) => {
            error!("Audit of {} failed: {}", source, err);
            eprintln!("{}", serde_json::to_string(&err.to_response())?);
            process::exit(err.exit_code());
        }
    }
}
