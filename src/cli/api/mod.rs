//! API command - runs the JSON API without the dashboard page

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;

/// Run the API server
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let state = crate::create_app_state(&config)?;
    let app = create_router(state);

    let addr = super::build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
