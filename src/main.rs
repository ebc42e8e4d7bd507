mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    model::audit::AuditPolicy,
    router::router,
    service::auth::token::TokenService,
    startup::{connect_to_database, init_tracing, shutdown_signal},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let db = connect_to_database(&config).await?;
    let tokens = TokenService::from_config(&config)?;

    let state = AppState::new(
        db,
        tokens,
        AuditPolicy {
            allow_update_after_delete: config.allow_update_after_delete,
        },
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
