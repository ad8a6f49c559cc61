//! Serve command - runs API + dashboard on the same port

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router_with_ui;

/// Run the combined API + dashboard server
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let state = crate::create_app_state(&config)?;
    let app = create_router_with_ui(state, &config.server.public_dir);

    let addr = super::build_socket_addr(&config)?;
    info!("Starting server (API + dashboard) on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
