use std::process::ExitCode;
use std::sync::Arc;

use attendance_console::api::HttpApiClient;
use attendance_console::config::ConsoleConfig;
use attendance_console::routes;
use attendance_console::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid console configuration");
            return ExitCode::FAILURE;
        }
    };

    let api = match HttpApiClient::new(config.api_base_url.clone(), config.timeouts) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "attendance API client init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        api = %config.api_base_url,
        web_dir = %config.web_dir.display(),
        matcher = ?config.public_route_match,
        "attendance API client initialized"
    );

    let port = config.port;
    let state = AppState::new(config, Arc::new(api));
    let app = routes::app(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "attendance console listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
