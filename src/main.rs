/// Main entry point for the Productivity Hub MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use tracing::info;

use productivity_hub_mcp::{Args, DatabaseLocation, HubConfig, ProductivityHub};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = HubConfig::from_args(Args::parse())?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr) // stdout carries JSON-RPC
        .init();

    info!("Starting Productivity Hub MCP server");
    match &config.database {
        DatabaseLocation::File(path) => info!("Using database at: {}", path.display()),
        DatabaseLocation::InMemory => info!("Using an in-memory database"),
    }
    if let Some(today) = config.today {
        info!("Today pinned to {}", today);
    }

    let hub = ProductivityHub::from_config(&config)?;
    hub.run().await?;

    info!("Productivity Hub MCP server shutdown complete");
    Ok(())
}
