pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod model;
pub mod ops;
pub mod validation;

use rusqlite::Connection;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::ServerConfig;
use http::AppState;

pub async fn run() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already set, ignore
    }

    let config = ServerConfig::from_env();
    info!("contact directory database: {:?}", config.db_path);

    let conn = Connection::open(&config.db_path)?;
    db::schema::initialize(&conn)?;

    if !config.seed_relationships.is_empty() {
        let inserted = ops::relationship_ops::seed_relationships(&conn, &config.seed_relationships)?;
        info!("seeded {} relationship(s)", inserted);
    }

    let app = http::router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
