use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use axum::http::{HeaderValue, Method};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use starboard::infrastructure;
use starboard::infrastructure::github::GithubClient;
use starboard::infrastructure::sqlite::repository_repo::SqliteRepositoryRepository;
use starboard::presentation::routes::{create_app_router, AppContext};
use starboard::shared::config::{Config, Overrides};
use starboard::shared::error::TrackerError;
use starboard::shared::result::Result;


#[derive(Parser, Debug)]
#[clap(name = "Starboard")]
#[clap(version)]
#[clap(about = "GitHub repository star tracker")]
pub struct Args {
    /// Configuration file (TOML); missing file means defaults
    #[clap(short, long, value_parser, default_value = "config.toml")]
    config: PathBuf,

    /// The SQLite database path
    #[clap(short, long, value_parser)]
    db_path: Option<PathBuf>,

    /// Server bind address
    #[clap(short, long)]
    bind_address: Option<SocketAddr>,

    /// GitHub API base URL (e.g. a GitHub Enterprise endpoint)
    #[clap(long, value_name = "URL")]
    github_api_url: Option<String>,
}


#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .pretty()
        .init();

    // 加载配置
    let config = Config::from_args_and_file(
        &args.config,
        Overrides {
            db_path: args.db_path,
            bind_address: args.bind_address,
            github_api_url: args.github_api_url,
        },
    )?;

    info!("Starting Starboard server...");
    info!("Configuration loaded: {:?}", config);

    // 初始化 SQLite 数据库
    let sqlite_pool = infrastructure::sqlite::create_pool(
        &config.database.sqlite_path,
        config.database.max_connections,
    )
    .await?;

    // 运行数据库迁移
    info!("Running database migrations...");
    infrastructure::sqlite::run_migrations(&sqlite_pool).await?;
    info!("Database migrations completed");

    let app_context = Arc::new(AppContext {
        repository_store: Arc::new(SqliteRepositoryRepository::new(sqlite_pool.clone())),
        metadata_client: Arc::new(GithubClient::new(&config.github)?),
    });

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);
    for origin in &config.server.cors_origins {
        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|e| TrackerError::Config(format!("Invalid CORS origin {}: {}", origin, e)))?;
        cors = cors.allow_origin(origin);
    }

    let app = create_app_router(app_context).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;

    info!("Server listening on {}", config.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sqlite_pool.close().await;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
