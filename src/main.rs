use crate::server::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod llm;
mod research;
mod server;
mod types;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
