use anyhow::Context;
use server::config;
use server::db::{self, Db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env().context("Invalid configuration")?;

    let db = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = db::pool::create_pool(url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Running migrations...");
            db::pool::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            Db::Postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory storage, data will not persist");
            Db::memory()
        }
    };

    tracing::info!("Grand-Prix tie split: {}", config.tie_split);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    server::serve(listener, db, config).await.context("Server error")?;
    Ok(())
}
