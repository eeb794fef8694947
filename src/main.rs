use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use brdata::api::{serve, AppState};
use brdata::tools::{BrDataTool, Tool};
use brdata::{Config, Params, PublicDataAdapter, Request};

#[derive(Parser)]
#[command(name = "brdata")]
#[command(about = "Brazilian public data adapter", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "TOML configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a serialized request, e.g. '{"action": "get_dolar_price"}'
    Invoke {
        #[arg(help = "Request JSON")]
        request: String,
    },
    /// Run an action with key=value parameters
    Call {
        #[arg(help = "Action name, e.g. get_cep_info")]
        action: String,
        #[arg(short, long = "param", value_parser = parse_param, help = "Parameter as key=value")]
        params: Vec<(String, String)>,
    },
    /// Print the tool definition JSON
    Definition,
    /// Serve the HTTP API
    Serve {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

fn parse_param(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", raw))?;
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let adapter = Arc::new(PublicDataAdapter::new(&config)?);

    match cli.command {
        Commands::Invoke { request } => {
            println!("{}", adapter.handle(&request).await);
        }
        Commands::Call { action, params } => {
            let params = params
                .into_iter()
                .fold(Params::new(), |acc, (key, value)| acc.with(key, value));
            println!("{}", adapter.dispatch(&Request::new(action, params)).await);
        }
        Commands::Definition => {
            let tool = BrDataTool::new(adapter);
            println!("{}", serde_json::to_string_pretty(&tool.definition())?);
        }
        Commands::Serve { port } => serve(AppState::new(adapter), port).await?,
    }

    Ok(())
}
