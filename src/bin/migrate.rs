// src/bin/migrate.rs
use anyhow::Result;
use article_service::{config::AppConfig, infrastructure::database};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// Apply every pending migration.
    Up,
    /// Revert every applied migration.
    Down,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Apply or revert the article schema migrations", long_about = None)]
struct Cli {
    #[arg(value_enum)]
    direction: Direction,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let pool = database::init_pool(&config).await?;

    match cli.direction {
        Direction::Up => {
            tracing::info!("applying pending migrations");
            database::run_migrations(&pool).await?;
        }
        Direction::Down => {
            tracing::info!("reverting applied migrations");
            database::revert_migrations(&pool).await?;
        }
    }

    pool.close().await;
    tracing::info!(direction = ?cli.direction, "migrations finished");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
