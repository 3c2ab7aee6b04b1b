use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use todo_cli::{repl, ClientConfig, LineReader, ReqwestTransport, TerminalConfirm, TerminalNotifier};
use todo_core::{TodoClient, TodoController};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todo-cli")]
#[command(about = "Terminal client for the todo service", version)]
struct Args {
    /// Endpoint root, e.g. http://127.0.0.1:5000
    #[arg(long, env = "TODO_API_URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "TODO_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Config file (default: ~/.config/todo-cli/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn resolve(self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().resolve()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "starting");

    let transport = ReqwestTransport::new(config.timeout()).context("Failed to build HTTP client")?;
    let input = LineReader::stdin();
    let controller = Arc::new(TodoController::new(
        TodoClient::new(&config.base_url),
        transport,
        TerminalNotifier,
        TerminalConfirm::new(Arc::clone(&input)),
    ));

    repl::run(controller, input).await
}
