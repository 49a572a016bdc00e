//! Catalogo server entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalogo_core::config::AppConfig;
use catalogo_core::error::AppError;
use catalogo_database::{migration, DatabasePool};

#[derive(Debug, Parser)]
#[command(name = "catalogo", about = "Product catalog REST API")]
struct Cli {
    /// Configuration environment (selects config/{env}.toml).
    #[arg(long, default_value = "development")]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Apply pending database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(&cli.env)?;
    init_tracing(&config);

    let db = DatabasePool::connect(&config.database).await?;

    match cli.command {
        Command::Serve => catalogo_api::run_server(config, db).await,
        Command::Migrate => {
            migration::run_migrations(db.pool()).await?;
            db.close().await;
            Ok(())
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
