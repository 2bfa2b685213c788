mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use encore::config::EncoreConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "encore", version, about = "Music assistant tool server over MCP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server on the configured transport
    Serve {
        /// Override the transport from config ("stdio" or "http")
        #[arg(long)]
        transport: Option<String>,
    },
    /// Run one retrieval and print the formatted context block
    Search {
        /// Free-text query
        query: String,
    },
    /// Print the live-session setup (model, instruction, tool declarations) as JSON
    Session {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the declared tools and their parameters
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let mut config = EncoreConfig::load()?;

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            if let Some(transport) = transport {
                config.server.transport = transport;
            }
            encore::server::serve(config).await?;
        }
        Command::Search { query } => {
            cli::search(&config, &query).await?;
        }
        Command::Session { pretty } => {
            cli::session(&config, pretty)?;
        }
        Command::Tools => {
            cli::tools();
        }
    }

    Ok(())
}
