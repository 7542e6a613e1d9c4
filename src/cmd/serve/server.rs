// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::process::process_handler;
use crate::cmd::serve::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for reproducible styling. `None` means fresh randomness.
    pub seed: Option<u64>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let state = ServerState::new(config.seed);
    let app = Router::new();
    let app = app.route("/process", post(process_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::info!("Starting server on {bind}");
    let listener = match TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => return fail(format!("failed to bind {bind}: {e}")),
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::debug!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
