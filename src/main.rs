//! Casdoor client - command line
//!
//! Lists the entities of the configured organization as JSON.

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use casdoor_client::{Client, Config};

const USAGE: &str = "usage: casdoor-client <users|roles|permissions|user NAME|role NAME|permission NAME>";

fn main() {
    // Load .env file (if present) before anything else
    if let Err(e) = dotenvy::dotenv() {
        // .env file is optional - only log if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = match Config::load() {
        Ok(c) => {
            info!("Configuration loaded successfully");
            c
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Configuration error: {:#}", e);
            eprintln!("\nPlease set the following environment variables:");
            eprintln!("  CASDOOR_ENDPOINT=<https://your-casdoor-host>");
            eprintln!("  CASDOOR_CLIENT_ID=<application client id>");
            eprintln!("  CASDOOR_CLIENT_SECRET=<application client secret>");
            eprintln!("  CASDOOR_ORGANIZATION_NAME=<organization>");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    match runtime.block_on(run(config, &args)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one command and render its result as pretty JSON.
async fn run(config: Config, args: &[String]) -> Result<String> {
    let client = Client::new(config).context("Failed to create Casdoor client")?;
    let name = args.get(1).map(String::as_str);

    let value = match (args[0].as_str(), name) {
        ("users", _) => serde_json::to_value(client.get_users().await?)?,
        ("roles", _) => serde_json::to_value(client.get_roles().await?)?,
        ("permissions", _) => serde_json::to_value(client.get_permissions().await?)?,
        ("user", Some(name)) => serde_json::to_value(client.get_user(name).await?)?,
        ("role", Some(name)) => serde_json::to_value(client.get_role(name).await?)?,
        ("permission", Some(name)) => serde_json::to_value(client.get_permission(name).await?)?,
        _ => anyhow::bail!(USAGE),
    };

    serde_json::to_string_pretty(&value).context("Failed to render output")
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
