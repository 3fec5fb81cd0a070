/// Encore Server - venue and artist booking directory
use clap::{Parser, Subcommand};
use encore_server::{api, config::ServerConfig, state::AppState};
use encore_storage::LocalStorageContext;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore-server")]
#[command(about = "Encore venue and artist booking directory", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ENCORE_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Print the number of venues in each city
    Locations,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore_server=info,encore_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(&config).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::Locations => locations(&config).await?,
    }

    Ok(())
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<LocalStorageContext> {
    let pool = encore_storage::create_pool(&config.storage.database_url).await?;
    encore_storage::run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Encore Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = open_storage(config).await?;
    tracing::info!("Database connected");

    let app = api::router(AppState::new(Arc::new(db)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate(config: &ServerConfig) -> anyhow::Result<()> {
    open_storage(config).await?;
    tracing::info!(database_url = %config.storage.database_url, "Migrations applied");
    Ok(())
}

async fn locations(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_storage(config).await?;
    let counts = encore_core::aggregate::location_summary(&db).await?;

    println!("Venues by location:");
    for location in counts {
        println!("  {}, {} - {}", location.city, location.state, location.count);
    }

    Ok(())
}
