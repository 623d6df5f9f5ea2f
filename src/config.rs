//! Command-line configuration for the key tool.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use crate::crypto::Curve;

/// Elliptic-curve key tool
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate EC private keys as `EC PRIVATE KEY` PEM
    Generate {
        /// Curve: P-224, P-256, P-384 or P-521
        #[arg(short, long, default_value = "P-256")]
        curve: String,

        /// Number of keys to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output file (one key) or directory (several keys); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads (default: number of CPU cores)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Derive the `PUBLIC KEY` PEM of an EC private key
    Public {
        /// Private key file; stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Public key file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the SHA-256 fingerprint of the public key to stderr
        #[arg(short, long, default_value = "false")]
        fingerprint: bool,
    },
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Generate {
                curve,
                count,
                output,
                workers,
            } => {
                curve
                    .parse::<Curve>()
                    .map_err(|_| ConfigError::InvalidCurve(curve.clone()))?;

                if *count == 0 {
                    return Err(ConfigError::InvalidCount);
                }

                if *workers == Some(0) {
                    return Err(ConfigError::InvalidWorkers);
                }

                if let Some(path) = output {
                    if *count > 1 && path.is_file() {
                        return Err(ConfigError::OutputNotDirectory(path.clone()));
                    }
                    if *count == 1 && path.is_dir() {
                        return Err(ConfigError::OutputIsDirectory(path.clone()));
                    }
                }

                Ok(())
            }
            Command::Public { input, .. } => {
                if let Some(path) = input {
                    if !path.is_file() {
                        return Err(ConfigError::MissingInput(path.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        match &self.command {
            Command::Generate { count, workers, .. } => {
                workers.unwrap_or_else(num_cpus::get).min(*count).max(1)
            }
            Command::Public { .. } => 1,
        }
    }

    /// Returns the log level selected by `-v`
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported curve {0:?} (expected P-224, P-256, P-384 or P-521)")]
    InvalidCurve(String),

    #[error("Key count must be at least 1")]
    InvalidCount,

    #[error("Worker count must be at least 1")]
    InvalidWorkers,

    #[error("Output {0} is a file; several keys need a directory")]
    OutputNotDirectory(PathBuf),

    #[error("Output {0} is a directory; a single key needs a file path")]
    OutputIsDirectory(PathBuf),

    #[error("Input file {0} does not exist")]
    MissingInput(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_generate_config(curve: &str, count: usize) -> Config {
        Config {
            verbose: 0,
            command: Command::Generate {
                curve: curve.into(),
                count,
                output: None,
                workers: None,
            },
        }
    }

    #[test]
    fn test_valid_generate() {
        let config = make_generate_config("P-384", 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_curve() {
        let config = make_generate_config("P-999", 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurve(_))
        ));
    }

    #[test]
    fn test_zero_count() {
        let config = make_generate_config("P-256", 0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount)));
    }

    #[test]
    fn test_zero_workers() {
        let mut config = make_generate_config("P-256", 4);
        if let Command::Generate { workers, .. } = &mut config.command {
            *workers = Some(0);
        }
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWorkers)));
    }

    #[test]
    fn test_output_kind() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("key.pem");
        std::fs::write(&file, "").unwrap();

        let mut config = make_generate_config("P-256", 3);
        if let Command::Generate { output, .. } = &mut config.command {
            *output = Some(file.clone());
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutputNotDirectory(_))
        ));

        let mut config = make_generate_config("P-256", 1);
        if let Command::Generate { output, .. } = &mut config.command {
            *output = Some(dir.path().to_path_buf());
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutputIsDirectory(_))
        ));
    }

    #[test]
    fn test_missing_input() {
        let config = Config {
            verbose: 0,
            command: Command::Public {
                input: Some(PathBuf::from("/nonexistent/key.pem")),
                output: None,
                fingerprint: false,
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingInput(_))
        ));
    }

    #[test]
    fn test_worker_count_capped_by_keys() {
        let mut config = make_generate_config("P-256", 2);
        if let Command::Generate { workers, .. } = &mut config.command {
            *workers = Some(16);
        }
        assert_eq!(config.worker_count(), 2);
    }

    #[test]
    fn test_parse_arguments() {
        let config =
            Config::try_parse_from(["ec_keytool", "-vv", "generate", "-c", "P-521", "-n", "3"])
                .unwrap();
        assert_eq!(config.log_level(), Level::DEBUG);
        match config.command {
            Command::Generate { curve, count, .. } => {
                assert_eq!(curve, "P-521");
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
