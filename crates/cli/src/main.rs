use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use taifin_engine::Engine;
use taifin_registry::Registry;
use taifin_types::EngineConfig;

#[derive(Parser)]
#[command(name = "taifin", version, about = "Taiwan open-finance data retrieval engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every operation in the dispatch catalog
    List {
        /// Only operations whose id contains this fragment
        #[arg(long)]
        filter: Option<String>,
    },
    /// Execute one operation and print its payload as JSON
    Run {
        /// Stable operation id, e.g. get_stock_quotes_realtime_all
        operation_id: String,
        /// Subject to narrow to: a security code, company name, or currency pair
        #[arg(long)]
        lookup: Option<String>,
        /// Cap on returned records
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let registry = Registry::bootstrap();
    let engine = Engine::new(EngineConfig::from_env(), registry);

    let code = match cli.command {
        Command::List { filter } => {
            let listing: Vec<_> = engine
                .registry()
                .operations()
                .filter(|entry| {
                    filter
                        .as_deref()
                        .map(|fragment| entry.operation_id.contains(fragment))
                        .unwrap_or(true)
                })
                .map(|entry| {
                    json!({
                        "operation_id": entry.operation_id,
                        "category": entry.category,
                        "summary": entry.summary,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
            ExitCode::SUCCESS
        }
        Command::Run {
            operation_id,
            lookup,
            limit,
        } => match engine.execute(&operation_id, lookup.as_deref(), limit).await {
            Ok(payload) => {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                ExitCode::SUCCESS
            }
            Err(failure) => {
                println!("{}", serde_json::to_string_pretty(&serde_json::to_value(&failure)?)?);
                ExitCode::FAILURE
            }
        },
    };

    engine.shutdown();
    Ok(code)
}

fn init_tracing() {
    // Logs go to stderr; stdout carries nothing but the JSON payload.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
