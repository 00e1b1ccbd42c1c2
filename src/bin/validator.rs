//! JSON Validator CLI
//!
//! Validates a JSON document against a schema file and prints the coerced
//! result.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use json_schema_validator::config::OutputFormat;
use json_schema_validator::{JsonSchemaValidator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-validator")]
#[command(about = "Validate JSON data against a schema of named types")]
struct Cli {
    /// Configuration file (defaults to validator.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data file (or stdin) against a schema file
    Check {
        /// Schema file
        #[arg(short, long)]
        schema: PathBuf,
        /// Data file, read from stdin when omitted
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Print the result on a single line
        #[arg(long)]
        compact: bool,
    },

    /// List registered type names
    Types,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = ValidatorConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    let validator = JsonSchemaValidator::from_config(&config)?;

    match cli.command {
        Commands::Check {
            schema,
            data,
            compact,
        } => {
            let format = if compact {
                OutputFormat::Compact
            } else {
                config.output.format
            };

            let schema_text = read_file(&schema)?;
            let data_text = match data {
                Some(path) => read_file(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read data from stdin")?;
                    buf
                }
            };

            match validator.validate(&schema_text, &data_text) {
                Ok(result) => {
                    tracing::info!(errors = result.errors.len(), "validation complete");
                    println!("{}", format.render(&result)?);
                    Ok(0)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "validation aborted");
                    println!("{}", format.render(&e.to_string())?);
                    Ok(1)
                }
            }
        }

        Commands::Types => {
            for name in validator.registry().names() {
                println!("{}", name);
            }
            Ok(0)
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
