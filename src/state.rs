use sqlx::PgPool;

use courseware_config::{CorsConfig, DatabaseConfig};
use courseware_db::{init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, cors_config: CorsConfig) -> Self {
        Self { db, cors_config }
    }
}

/// Connects to the database, applies migrations, and loads the remaining config.
pub async fn init_app_state(database_config: &DatabaseConfig) -> anyhow::Result<AppState> {
    let db = init_db_pool(database_config).await?;
    run_migrations(&db).await?;

    Ok(AppState::new(db, CorsConfig::from_env()))
}
