// File: services/slotbot_backend/src/main.rs
use slotbot_backend::{
    app::build_router,
    app_state::AppState,
    shutdown::{shutdown_signal, GRACE_PERIOD},
};
use slotbot_common::{logging, SlotbotError};
use slotbot_config::load_config;
use tokio::net::TcpListener;
use tracing::info;

async fn run() -> Result<(), SlotbotError> {
    let config = load_config()?;
    config.validate()?;

    let state = AppState::from_config(config).await?;
    let addr = state.bind_address();
    let app = build_router(&state);

    let listener = TcpListener::bind(&addr).await?;
    info!("SlotBot listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(GRACE_PERIOD))
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        logging::log_error(e, "SlotBot failed");
        std::process::exit(1);
    }
}
