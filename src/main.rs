//! Elliptic-curve key tool CLI
//!
//! Usage:
//!   ec_keytool generate -c P-256                  # Print a new P-256 private key
//!   ec_keytool generate -c P-384 -n 10 -o keys/   # Write 10 P-384 keys to keys/
//!   ec_keytool public -i key.pem -o key.pub       # Derive the public key

use std::error::Error;
use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ec_keytool::crypto::{Curve, PrivateKey};
use ec_keytool::output;
use ec_keytool::{generate_batch, Command, Config};

fn main() {
    let config = Config::parse();
    init_logging(&config);

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let result = match &config.command {
        Command::Generate {
            curve,
            count,
            output,
            ..
        } => run_generate(curve, *count, output.as_deref(), config.worker_count()),
        Command::Public {
            input,
            output,
            fingerprint,
        } => run_public(input.as_deref(), output.as_deref(), *fingerprint),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(config: &Config) {
    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(
    curve: &str,
    count: usize,
    output: Option<&Path>,
    workers: usize,
) -> Result<(), Box<dyn Error>> {
    let curve: Curve = curve.parse()?;
    let keys = generate_batch(curve, count, workers)?;

    match output {
        Some(path) if count > 1 => {
            let pems: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
            let paths = output::write_private_keys(path, curve, &pems)?;
            eprintln!("Wrote {} {} key(s) to {}", paths.len(), curve, path.display());
        }
        Some(path) => {
            output::write_private_key(path, &keys[0])?;
            eprintln!("Wrote {} key to {}", curve, path.display());
        }
        None => {
            for key in &keys {
                output::write_output(None, key)?;
            }
        }
    }

    Ok(())
}

fn run_public(
    input: Option<&Path>,
    output: Option<&Path>,
    fingerprint: bool,
) -> Result<(), Box<dyn Error>> {
    let pem = output::read_input(input)?;
    let key = PrivateKey::from_pem(&pem)?;
    tracing::info!(curve = %key.curve(), "loaded private key");

    output::write_output(output, &key.public_key_pem()?)?;

    if fingerprint {
        eprintln!("SHA256:{}", key.fingerprint()?);
    }

    Ok(())
}
