//! `form-routes`: inspect and serve the application's route table.
//!
//! ```text
//! form-routes [--config routes.toml] routes
//! form-routes resolve /order
//! form-routes name feedback
//! form-routes serve --bind 127.0.0.1:8080
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use form_routes::lifecycle::{signals, startup, Shutdown};
use form_routes::observability::init_logging;
use form_routes::{HttpServer, Resolution};

#[derive(Parser)]
#[command(name = "form-routes")]
#[command(about = "Route table for the form application", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes and redirects
    Routes,
    /// Resolve a path, following redirects
    Resolve { path: String },
    /// Look up the path registered under a route name
    Name { name: String },
    /// Serve the resolution API
    Serve {
        /// Overrides `server.bind_address`.
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The subscriber comes from the loaded file, so configuration errors
    // are reported before logging exists.
    let (config, table) = match startup::initialize(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Invalid route configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config.observability)?;
    startup::log_table(&table, cli.config.as_deref());

    match cli.command {
        Commands::Routes => {
            let listing = serde_json::json!({
                "history": table.history(),
                "routes": table.routes(),
                "redirects": table.redirects(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Commands::Resolve { path } => match table.resolve(&path) {
            Resolution::Resolved(route) => println!("{}", serde_json::to_string_pretty(&route)?),
            Resolution::NotFound { path } => {
                eprintln!("No route matches {}", path);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Name { name } => match table.resolve_name(&name) {
            Some(route) => println!("{}", serde_json::to_string_pretty(&route)?),
            None => {
                eprintln!("No route is named {}", name);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Serve { bind } => {
            let bind_address = bind.unwrap_or_else(|| config.server.bind_address.clone());
            let listener = TcpListener::bind(&bind_address).await?;

            let shutdown = Shutdown::new();
            let signal = shutdown.subscribe();
            signals::trigger_on_ctrl_c(shutdown.clone());

            let server = HttpServer::new(table, &config.server);
            server.run(listener, signal).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(ExitCode::SUCCESS)
}
