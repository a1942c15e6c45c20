use std::env::set_var;
use std::sync::Arc;

use api::config::{Runtime, ServerConfig};
use api::services::game_server::GameServer;
use api::state::AppState;
use api::{create_app, server};
use lambda_http::{run, Error};
use shared::repositories::game_repository::StaticGameRepository;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ServerConfig::from_env()?;

    // Set up services
    let game_repository = Arc::new(StaticGameRepository::new());
    let game_server = Arc::new(GameServer::new(game_repository));
    let app = create_app(AppState::new(game_server));

    match config.runtime {
        Runtime::Lambda => {
            set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

            // required to enable CloudWatch error logging by the runtime
            lambda_http::tracing::init_default_subscriber();

            info!("Starting Lambda HTTP runtime");
            run(app).await
        }
        Runtime::Local => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();

            let addr = config.socket_addr();
            let listener = TcpListener::bind(addr).await.map_err(|e| {
                error!("Failed to bind {}: {}", addr, e);
                e
            })?;

            server::serve(listener, app, server::shutdown_signal()).await?;
            info!("Server stopped");
            Ok(())
        }
    }
}
