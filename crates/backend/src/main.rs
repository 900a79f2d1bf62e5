pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::print::PrintState;
use crate::shared::document_generator::GraphQlDocumentGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    tracing::info!("Document service: {}", config.graphql.url);

    let state = PrintState {
        generator: Arc::new(GraphQlDocumentGenerator::new(&config.graphql)?),
    };

    // The console is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure_routes(state).layer(cors);

    let addr = config.server.bind_address();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Error: {} is already in use", addr);
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
