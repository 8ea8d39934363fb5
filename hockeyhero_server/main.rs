use std::sync::Arc;

use hockeyhero_app::{app::AppBus, config::Config};
use hockeyhero_db::{establish_connection_pool, run_migrations, uow::PostgresUnitOfWorkProvider};
use hockeyhero_types::{Result, errors::ApplicationError};
use hockeyhero_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let (config, app_bus) = setup_app().await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.port).await
}

async fn setup_app() -> Result<(Arc<Config>, Arc<AppBus>), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let db_pool = establish_connection_pool().await?;

    run_migrations(&db_pool).await?;
    tracing::info!("Database migrations applied");

    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool));
    let app_bus = Arc::new(AppBus::new(config.clone(), uow_provider));

    Ok((config, app_bus))
}
