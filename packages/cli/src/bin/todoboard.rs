// ABOUTME: Entry point for the todoboard binary
// ABOUTME: Parses commands, loads configuration and starts the server or prepares the database

use clap::{Parser, Subcommand};
use colored::*;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use todoboard_cli::{logging, open_storage, run_server, Config};

#[derive(Parser)]
#[command(name = "todoboard")]
#[command(about = "Todoboard - a small todo list with comments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve {
        #[arg(long, help = "Address to bind (overrides TODOBOARD_HOST)")]
        host: Option<IpAddr>,
        #[arg(long, help = "Port to listen on (overrides TODOBOARD_PORT)")]
        port: Option<u16>,
        #[arg(long, help = "SQLite database file (overrides TODOBOARD_DATABASE_PATH)")]
        database: Option<PathBuf>,
    },
    /// Create the database schema and exit
    InitDb {
        #[arg(long, help = "SQLite database file (overrides TODOBOARD_DATABASE_PATH)")]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        database: None,
    });

    if let Err(e) = handle_command(command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Commands::Serve {
            host,
            port,
            database,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database_path = database;
            }
            logging::init_tracing(&config.log_filter);
            run_server(config).await
        }
        Commands::InitDb { database } => {
            if let Some(database) = database {
                config.database_path = database;
            }
            logging::init_tracing(&config.log_filter);
            let storage = open_storage(&config).await?;
            storage.pool().close().await;
            println!(
                "{} {}",
                "Database ready:".green().bold(),
                config.database_path.display()
            );
            Ok(())
        }
    }
}
