//! portfolio CLI - runs the portfolio backend
//!
//! Loads `.env` from the working directory, initialises tracing, and serves
//! the `/projetos` API until Ctrl+C/SIGTERM.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

use serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about = "Backend for the portfolio front-end")]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real env vars and flags still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    serve::run_serve(cli.serve).await
}
