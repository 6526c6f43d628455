//! `catalogd` — the product catalog server binary.
//!
//! Usage:
//!   catalogd [-c <context-name-or-path>] [--listen <addr>] [--db <path>]
//!
//! The context name resolves to `/etc/catalog/<name>.toml`. If a path
//! with `/` or `.` is given, it's used directly. Without `-c`, built-in
//! defaults apply.

mod config;
mod routes;

use std::sync::Arc;

use catalog_core::Module;
use clap::Parser;
use tracing::info;

use config::ServerConfig;

/// Product catalog server.
#[derive(Parser, Debug)]
#[command(name = "catalogd", about = "Product catalog server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,

    /// Path to the SQLite database file (overrides the config file).
    #[arg(long = "db")]
    db: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let mut server_config = match &cli.config {
        Some(name) => {
            let config_path = ServerConfig::resolve_path(name);
            info!("Loading configuration from {}", config_path.display());
            ServerConfig::load(&config_path)?
        }
        None => ServerConfig::default(),
    };
    if let Some(listen) = cli.listen {
        server_config.listen = listen;
    }
    if let Some(db) = cli.db {
        server_config.db_path = db;
    }

    if let Some(parent) = server_config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Initialize the embedded store.
    let sql: Arc<dyn catalog_sql::SQLStore> = Arc::new(
        catalog_sql::SqliteStore::open(&server_config.db_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    let products_module = products::ProductsModule::new(Arc::clone(&sql))?;
    info!("Products module initialized");

    let module_routes = vec![products_module.routes()];

    // Schema metadata served for the external documentation renderer.
    let schema_json = routes::build_schema(vec![products::schema_def()], &server_config.servers);

    let app = routes::build_router(module_routes, schema_json);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&server_config.listen).await?;
    info!("Catalog server listening on {}", server_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
