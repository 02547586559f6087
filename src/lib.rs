pub mod chain;
pub mod cli;
pub mod config;
pub mod llm;
pub mod sanitize;
pub mod server;

use cli::Args;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("HTTP Port: {}", args.port);
    info!("Upstream URL: {}", args.upstream_url);
    info!("Completion Model: {}", args.model);
    info!("Temperature: {}", args.temperature);
    info!("Max Tokens: {}", args.max_tokens);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let server = Server::new(args);
    server.run().await
}
