//! rv-verify: check a captured HTTP exchange against its response signature.
//!
//! Exits with status 0 for `verified` and `not_requested`, 1 for `failed`.

mod capture;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use rv_signing::{
    FixedClock, KeyStore, ResponseVerificationApi, ResponseVerifier, VerificationConfig,
    VerificationMode, VerificationResult,
};
use rv_telemetry::{encode_metrics, init_telemetry, MeteredVerifier, TelemetryConfig};

use capture::Capture;

/// Verify a captured response signature
#[derive(Parser, Debug)]
#[command(name = "rv-verify")]
#[command(about = "Verify the signature of a captured HTTP response")]
struct Args {
    /// JSON file describing the exchange
    capture: PathBuf,

    /// Root public key (base64, 32 bytes) instead of the embedded one
    #[arg(long)]
    public_key: Option<String>,

    /// Evaluate key expiration at this instant (RFC 3339) instead of now
    #[arg(long)]
    now: Option<String>,

    /// disabled, informational or enforced
    #[arg(long, default_value = "informational")]
    mode: VerificationMode,

    /// Print Prometheus metrics after verifying
    #[arg(long)]
    metrics: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _telemetry = match init_telemetry(TelemetryConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    match run(&args) {
        Ok(VerificationResult::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<VerificationResult> {
    let json = std::fs::read_to_string(&args.capture)
        .with_context(|| format!("reading {}", args.capture.display()))?;
    let capture = Capture::parse(&json)?;

    let mut verifier = ResponseVerifier::new(VerificationConfig::with_mode(args.mode));

    if args.public_key.is_some() && !args.mode.is_enabled() {
        eprintln!("Warning: --public-key has no effect in disabled mode");
    }

    if let Some(encoded) = &args.public_key {
        let key = KeyStore::public_key_from_base64(encoded).context("invalid --public-key")?;
        verifier = verifier.with_public_key(Some(key));
    }

    if let Some(now) = &args.now {
        let now: DateTime<Utc> = DateTime::parse_from_rfc3339(now)
            .context("invalid --now")?
            .with_timezone(&Utc);
        verifier = verifier.with_clock(Arc::new(FixedClock(now)));
    }

    let verifier = MeteredVerifier::new(verifier);
    let request = capture.request()?;
    let verified = verifier.verify(&request, capture.response()?);

    println!("{}: {}", request, verified.verification_result());

    if args.metrics {
        print!("{}", encode_metrics()?);
    }

    Ok(verified.verification_result())
}
