//! Caption Engine CLI
//!
//! Reads a JSON generation request from a file or stdin and writes the
//! response envelope (or a CSV / plain-text rendering) to stdout.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use caption_engine::{
    config::Config,
    generator::CaptionEngine,
    observability::init_observability,
    protocol::{export, GenerateInput, GenerateResponse, RequestHandler},
};
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `{ok, result}` / `{ok, error}` envelope
    Json,
    /// One row per variant
    Csv,
    /// Full texts separated by `---`
    Text,
}

#[derive(Parser)]
#[command(name = "caption-engine")]
#[command(about = "Generate travel captions and hashtags from a JSON request")]
#[command(version)]
struct Cli {
    /// Request file (reads stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, short, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Override the request seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of variants
    #[arg(long)]
    variants: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env(cli.config.as_deref())
        .context("failed to load configuration")?;
    init_observability(&config.logging);
    info!("Configuration loaded");

    let body = read_request(cli.input.as_deref())?;
    let handler = RequestHandler::new(Arc::new(CaptionEngine::new(config.engine)));

    let response = match serde_json::from_str::<GenerateInput>(&body) {
        Ok(mut input) => {
            if let Some(seed) = cli.seed {
                input.seed = Some(seed.into());
            }
            if let Some(variants) = cli.variants {
                input.variants = Some(variants);
            }
            handler.handle(input)
        }
        Err(_) => handler.handle_json(&body),
    };

    emit(&response, cli.format)?;

    Ok(if response.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_request(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            Ok(body)
        }
    }
}

fn emit(response: &GenerateResponse, format: OutputFormat) -> anyhow::Result<()> {
    match (format, &response.result) {
        (OutputFormat::Json, _) => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        (OutputFormat::Csv, Some(result)) => println!("{}", export::to_csv(result)),
        (OutputFormat::Text, Some(result)) => println!("{}", export::join_full(result)),
        (_, None) => {
            eprintln!(
                "error: {}",
                response.error.as_deref().unwrap_or("generation failed")
            );
        }
    }
    Ok(())
}
