use clap::Parser;
use codemarks::{
    cli::{Cli, Commands},
    config::{ManifestConfig, Settings},
    db,
    manifest::ManifestRequest,
    web::{routes, AppState},
    Error, Result,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,codemarks=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            serve(load_settings()?, port, host).await?;
        }
        Commands::Migrate => {
            migrate(load_settings()?).await?;
        }
        Commands::Manifest {
            repo_path,
            subdirectory,
            owner,
            branch,
            output,
        } => {
            let request = ManifestRequest {
                repo_path,
                subdirectory: PathBuf::from(subdirectory),
                owner,
                branch,
                output,
            };
            let config = ManifestConfig::from_env();
            config.validate()?;

            let mut stdout = std::io::stdout();
            if codemarks::cli::commands::manifest(&config, &request, &mut stdout).is_err() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Load and validate the server and database settings
fn load_settings() -> Result<Settings> {
    let settings = Settings::from_env()?;
    settings.validate()?;
    Ok(settings)
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Code Marks server");
    info!("Database: {}", settings.database.url);

    let pool = db::init_pool_with_config(&settings.database).await?;
    info!(
        "Database connection established (max_connections: {}, min_connections: {})",
        settings.database.max_connections, settings.database.min_connections
    );

    db::run_migrations(&pool).await?;
    info!("Database migrations completed");

    let state = AppState {
        pool,
        settings: settings.clone(),
    };
    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("Code Marks running at http://{addr}/ (Ctrl+C to stop)");
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn migrate(settings: Settings) -> Result<()> {
    info!("Running database migrations");

    let pool = db::init_pool(&settings.database.url).await?;
    db::run_migrations(&pool).await?;

    println!("✓ Database migrations completed successfully");
    Ok(())
}
